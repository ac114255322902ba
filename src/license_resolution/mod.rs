//! License resolution core.
//!
//! - `domain`: value objects (labels, components, the manifest, override rules, summaries)
//! - `policies`: pure decision functions (normalizer, internal classifier, identifier mapping)
//! - `services`: the resolution engine and its single-flight cache
pub mod domain;
pub mod policies;
pub mod services;
