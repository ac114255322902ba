pub mod classifier;
pub mod identifier_mapper;
pub mod normalizer;

pub use classifier::InternalClassifier;
pub use identifier_mapper::{PackageIdentifier, VanityMappings};
pub use normalizer::LicenseNormalizer;
