/// Type alias for Result with anyhow::Error as the error type.
/// Used across the crate so every layer propagates errors the same way.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
