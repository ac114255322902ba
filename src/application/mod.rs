/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates the
/// resolution engine and coordinates with infrastructure through ports.
pub mod dto;
pub mod use_cases;
