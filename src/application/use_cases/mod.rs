/// Use cases module containing application business logic orchestration
mod enrich_licenses;

pub use enrich_licenses::EnrichLicensesUseCase;
