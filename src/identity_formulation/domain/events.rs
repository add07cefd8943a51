use super::category::{FormFactor, MemoryPool};
use std::fmt;

/// Fallback paths taken while formulating an identity.
///
/// None of these are errors: each records that a narrower choice was
/// unavailable and a wider (or default) one was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulationEvent {
    /// Random search found no compatible CPU/motherboard pair
    RandomSearchExhausted {
        attempts: usize,
        fallback_preset: String,
    },
    /// The requested strategy is not defined in the catalog
    StrategyFallback { requested: String, applied: String },
    /// No battery shares the motherboard's category; chose among all batteries
    BatteryCategoryWidened { category: String },
    /// Laptop board but the catalog has no batteries at all
    NoBatteryAvailable,
    /// The tier's memory pool is empty; chose among all memory configurations
    MemoryPoolWidened { pool: MemoryPool },
    /// No display matches the form factor; chose among all displays
    DisplayPoolWidened { form_factor: FormFactor },
}

impl fmt::Display for FormulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulationEvent::RandomSearchExhausted {
                attempts,
                fallback_preset,
            } => write!(
                f,
                "Could not find a compatible random combination in {} attempts, using preset '{}'",
                attempts, fallback_preset
            ),
            FormulationEvent::StrategyFallback { requested, applied } => write!(
                f,
                "Strategy '{}' is not defined in the hardware database, using '{}'",
                requested, applied
            ),
            FormulationEvent::BatteryCategoryWidened { category } => write!(
                f,
                "No battery matches category '{}', choosing from all batteries",
                category
            ),
            FormulationEvent::NoBatteryAvailable => {
                write!(f, "Laptop motherboard selected but no batteries are defined")
            }
            FormulationEvent::MemoryPoolWidened { pool } => write!(
                f,
                "No memory configuration in the '{}' pool, choosing from all memory configurations",
                pool.as_str()
            ),
            FormulationEvent::DisplayPoolWidened { form_factor } => write!(
                f,
                "No {} display defined, choosing from all displays",
                form_factor
            ),
        }
    }
}
