/// Type alias for Result with anyhow::Error as the error type.
/// Every layer returns this so adapters can attach context with `anyhow::Context`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
