pub mod license_resolver;
pub mod resolution_plan;
pub mod single_flight;

pub use license_resolver::{LicenseResolver, LookupSources};
pub use resolution_plan::{ResolutionPlan, ResolutionPlanner, ResolverConfig};
pub use single_flight::SingleFlightCache;
