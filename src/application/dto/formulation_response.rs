use crate::identity_formulation::domain::{FormulationEvent, IdentityRecord};

/// FormulationResponse - Internal response DTO from the formulation use case
///
/// Carries the complete identity plus every fallback taken while producing it.
#[derive(Debug, Clone)]
pub struct FormulationResponse {
    pub identity: IdentityRecord,
    /// Empty when no fallback path was taken
    pub events: Vec<FormulationEvent>,
}

impl FormulationResponse {
    pub fn new(identity: IdentityRecord, events: Vec<FormulationEvent>) -> Self {
        Self { identity, events }
    }

    pub fn used_fallback(&self) -> bool {
        !self.events.is_empty()
    }
}
