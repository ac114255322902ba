use crate::license_resolution::domain::LicenseLabel;
use crate::license_resolution::services::{
    ResolutionPlan, ResolutionPlanner, ResolverConfig, SingleFlightCache,
};
use crate::ports::outbound::{LicenseLookup, LookupSource};
use std::sync::Arc;

/// One lookup per [`LookupSource`], shared by every worker
#[derive(Clone)]
pub struct LookupSources {
    repository_host: Arc<dyn LicenseLookup>,
    registry: Arc<dyn LicenseLookup>,
    documentation_site: Arc<dyn LicenseLookup>,
}

impl LookupSources {
    pub fn new(
        repository_host: Arc<dyn LicenseLookup>,
        registry: Arc<dyn LicenseLookup>,
        documentation_site: Arc<dyn LicenseLookup>,
    ) -> Self {
        Self {
            repository_host,
            registry,
            documentation_site,
        }
    }

    pub fn get(&self, source: LookupSource) -> &dyn LicenseLookup {
        match source {
            LookupSource::RepositoryHost => self.repository_host.as_ref(),
            LookupSource::Registry => self.registry.as_ref(),
            LookupSource::DocumentationSite => self.documentation_site.as_ref(),
        }
    }
}

/// LicenseResolver - the resolution engine
///
/// Routes a lookup name through [`ResolutionPlanner`], runs the planned
/// lookup chain, and memoizes the answer per name in a
/// [`SingleFlightCache`]. For any name the whole chain runs at most once
/// per resolver, however many workers ask for it concurrently.
pub struct LicenseResolver {
    planner: ResolutionPlanner,
    sources: LookupSources,
    cache: SingleFlightCache,
}

impl LicenseResolver {
    pub fn new(config: ResolverConfig, sources: LookupSources) -> Self {
        Self {
            planner: ResolutionPlanner::new(config),
            sources,
            cache: SingleFlightCache::new(),
        }
    }

    /// Resolves the license label for `name`
    pub async fn resolve(&self, name: &str) -> LicenseLabel {
        self.cache
            .get_or_resolve(name, || self.resolve_uncached(name))
            .await
    }

    /// Completed cache entry for `name`, if any
    pub fn cached(&self, name: &str) -> Option<LicenseLabel> {
        self.cache.get(name)
    }

    /// Number of names resolved so far
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    async fn resolve_uncached(&self, name: &str) -> LicenseLabel {
        let plan = self.planner.plan(name);
        match plan {
            ResolutionPlan::Override { pattern, label } => {
                tracing::debug!(name, %pattern, %label, "override rule matched");
                label
            }
            ResolutionPlan::Lookup { lookup_name, chain } => {
                self.run_chain(name, &lookup_name, chain).await
            }
            settled => {
                let label = settled.settled_label().unwrap_or_else(LicenseLabel::unknown);
                tracing::debug!(name, %label, "resolved without lookup");
                label
            }
        }
    }

    async fn run_chain(
        &self,
        name: &str,
        lookup_name: &str,
        chain: &[LookupSource],
    ) -> LicenseLabel {
        let mut label = LicenseLabel::unknown();
        for source in chain {
            label = self.sources.get(*source).lookup(lookup_name).await;
            tracing::debug!(name, lookup_name, %source, %label, "lookup finished");
            if !label.is_unknown() {
                break;
            }
        }
        label
    }
}
