//! Short labels derived from catalog display names.
//!
//! Hostnames and profile names are built from whitespace-delimited tokens of
//! the motherboard product name and the CPU model. The catalog is validated
//! against [`CPU_MODEL_MIN_TOKENS`] and [`PRODUCT_NAME_MIN_TOKENS`] at load
//! time so these lookups succeed during assembly.

/// CPU models need a third token (e.g. `i5-10400` in `Intel Core i5-10400`)
pub const CPU_MODEL_MIN_TOKENS: usize = 3;

/// Product names need a first token
pub const PRODUCT_NAME_MIN_TOKENS: usize = 1;

/// Returns the whitespace-delimited token at `index`, if present
pub fn short_label(display_name: &str, index: usize) -> Option<&str> {
    display_name.split_whitespace().nth(index)
}

pub fn token_count(display_name: &str) -> usize {
    display_name.split_whitespace().count()
}

/// First token of a motherboard product name: `Pro B460M` -> `Pro`
pub fn board_label(product_name: &str) -> Option<&str> {
    short_label(product_name, 0)
}

/// Lowercased third token of a CPU model with any `(tm)` marker removed
pub fn hostname_cpu_label(model: &str) -> Option<String> {
    short_label(model, 2).map(|token| token.to_lowercase().replace("(tm)", ""))
}

/// Fourth token of a CPU model, or the third when the model is only three tokens long
pub fn profile_cpu_label(model: &str) -> Option<&str> {
    short_label(model, 3).or_else(|| short_label(model, 2))
}
