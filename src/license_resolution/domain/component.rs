use crate::license_resolution::domain::LicenseLabel;
use crate::shared::Result;
use serde_json::{json, Map, Value};

/// A single SBOM component as seen by the resolution engine.
///
/// `name` is the identity used for resolution and caching. It is not unique
/// across ecosystems and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    version: String,
    purl: Option<String>,
    licenses: Vec<String>,
}

impl Component {
    pub fn new(name: String, version: String, purl: Option<String>) -> Self {
        Self {
            name,
            version,
            purl: purl.filter(|p| !p.trim().is_empty()),
            licenses: Vec::new(),
        }
    }

    pub fn with_licenses(mut self, licenses: Vec<String>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    /// Raw license identifiers currently declared in the manifest
    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }
}

/// A CycloneDX document together with the components extracted from it.
///
/// The document is kept as raw JSON so that everything the enricher does not
/// touch is written back unchanged; only `components[i].licenses` is rewritten.
#[derive(Debug, Clone)]
pub struct Manifest {
    document: Value,
    components: Vec<Component>,
}

impl Manifest {
    /// Builds a manifest from a parsed JSON document.
    ///
    /// A document without a `components` array has no components.
    ///
    /// # Errors
    /// Returns an error if the document is not a JSON object, `components` is
    /// not an array, or a component entry is not an object.
    pub fn from_document(document: Value) -> Result<Self> {
        let root = document
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("SBOM root must be a JSON object"))?;

        let components = match root.get("components") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| parse_component(idx, entry))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => anyhow::bail!("`components` must be an array"),
        };

        Ok(Self {
            document,
            components,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Replaces the license field of the component at `index` with the
    /// single-entry shape `[{"license": {"id": <label>}}]`.
    pub fn set_license(&mut self, index: usize, label: &LicenseLabel) -> Result<()> {
        let component = self
            .components
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("component index {} out of range", index))?;
        component.licenses = vec![label.as_str().to_string()];

        let entry = self
            .document
            .get_mut("components")
            .and_then(|c| c.get_mut(index))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| anyhow::anyhow!("component #{} missing from document", index))?;
        entry.insert(
            "licenses".to_string(),
            json!([{ "license": { "id": label.as_str() } }]),
        );
        Ok(())
    }

    /// Serializes the document as pretty-printed JSON, key order preserved
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}

fn parse_component(idx: usize, entry: &Value) -> Result<Component> {
    let object = entry
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("component #{} is not a JSON object", idx))?;

    let name = string_field(object, "name").unwrap_or_default();
    let version = string_field(object, "version").unwrap_or_default();
    let purl = string_field(object, "purl");

    Ok(Component::new(name, version, purl).with_licenses(declared_licenses(object)))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Collects `license.id`, `license.name` and `expression` entries
fn declared_licenses(object: &Map<String, Value>) -> Vec<String> {
    let Some(Value::Array(choices)) = object.get("licenses") else {
        return Vec::new();
    };

    choices
        .iter()
        .filter_map(|choice| {
            if let Some(license) = choice.get("license") {
                license
                    .get("id")
                    .or_else(|| license.get("name"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            } else {
                choice
                    .get("expression")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            }
        })
        .collect()
}
