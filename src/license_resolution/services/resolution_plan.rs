use crate::license_resolution::domain::{LicenseLabel, OverrideTable};
use crate::license_resolution::policies::{InternalClassifier, VanityMappings};
use crate::ports::outbound::LookupSource;

/// Names under this prefix are repository paths the repository host can answer for
const REPOSITORY_HOST_PREFIX: &str = "github.com/";

/// Module namespaces that have no registry equivalent and go straight to the
/// documentation site.
pub const DOCUMENTATION_SITE_PREFIXES: &[&str] = &[
    "google.golang.org/",
    "gopkg.in/",
    "go.opencensus.io",
    "go.opentelemetry.io",
    "cloud.google.com/",
    "k8s.io/",
    "sigs.k8s.io/",
];

/// Repository paths prefer authoritative repository metadata, then the scrape
const REPOSITORY_PATH_CHAIN: &[LookupSource] =
    &[LookupSource::RepositoryHost, LookupSource::DocumentationSite];

const MODULE_PATH_CHAIN: &[LookupSource] = &[LookupSource::DocumentationSite];

const REGISTRY_CHAIN: &[LookupSource] = &[LookupSource::Registry];

/// Everything the planner needs, injected at construction
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    pub overrides: OverrideTable,
    pub vanity_mappings: VanityMappings,
    /// Extra documentation-site prefixes appended to the built-in list
    pub extra_module_prefixes: Vec<String>,
}

/// The decision taken for a lookup name before any network access.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionPlan {
    /// An override rule matched; its label is final and not normalized
    Override { pattern: String, label: LicenseLabel },
    /// Vendored/in-tree component or manifest file
    Internal,
    /// Try `chain` in order against `lookup_name`; the first label other
    /// than `UNKNOWN` wins, otherwise the last source's answer stands
    Lookup {
        lookup_name: String,
        chain: &'static [LookupSource],
    },
    /// Nothing can be looked up for this name
    Unresolvable,
}

impl ResolutionPlan {
    /// The label when no external lookup is needed
    pub fn settled_label(&self) -> Option<LicenseLabel> {
        match self {
            ResolutionPlan::Override { label, .. } => Some(label.clone()),
            ResolutionPlan::Internal => Some(LicenseLabel::proprietary()),
            ResolutionPlan::Unresolvable => Some(LicenseLabel::unknown()),
            ResolutionPlan::Lookup { .. } => None,
        }
    }
}

/// ResolutionPlanner - pure routing for the fallback chain
///
/// Order: override rules, internal classification, repository or vanity
/// paths, documentation-site module prefixes, registry fallback.
#[derive(Debug, Clone)]
pub struct ResolutionPlanner {
    overrides: OverrideTable,
    vanity_mappings: VanityMappings,
    module_prefixes: Vec<String>,
}

impl ResolutionPlanner {
    pub fn new(config: ResolverConfig) -> Self {
        let module_prefixes = DOCUMENTATION_SITE_PREFIXES
            .iter()
            .map(|p| p.to_string())
            .chain(config.extra_module_prefixes)
            .collect();

        Self {
            overrides: config.overrides,
            vanity_mappings: config.vanity_mappings,
            module_prefixes,
        }
    }

    pub fn plan(&self, name: &str) -> ResolutionPlan {
        if let Some(rule) = self.overrides.first_match(name) {
            return ResolutionPlan::Override {
                pattern: rule.pattern().to_string(),
                label: rule.license().clone(),
            };
        }

        if InternalClassifier::is_internal(name) {
            return ResolutionPlan::Internal;
        }

        if name.starts_with(REPOSITORY_HOST_PREFIX) || self.vanity_mappings.has_prefix(name) {
            return ResolutionPlan::Lookup {
                lookup_name: self.vanity_mappings.map(name),
                chain: REPOSITORY_PATH_CHAIN,
            };
        }

        if self
            .module_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        {
            return ResolutionPlan::Lookup {
                lookup_name: name.to_string(),
                chain: MODULE_PATH_CHAIN,
            };
        }

        if !name.is_empty() {
            return ResolutionPlan::Lookup {
                lookup_name: name.to_string(),
                chain: REGISTRY_CHAIN,
            };
        }

        ResolutionPlan::Unresolvable
    }
}
