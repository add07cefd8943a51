use crate::identity_formulation::domain::{ComponentIds, DEFAULT_STRATEGY};

/// How the six required components are chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// A named preset profile
    Preset(String),
    /// A random compatible draw
    Random,
    /// Explicit component ids
    Components(ComponentIds),
}

/// FormulationRequest - Internal request DTO for the formulation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulationRequest {
    pub mode: SelectionMode,
    /// Randomization strategy name; unknown names fall back to `moderate`
    pub strategy: String,
}

impl FormulationRequest {
    pub fn new(mode: SelectionMode, strategy: Option<&str>) -> Self {
        Self {
            mode,
            strategy: strategy.unwrap_or(DEFAULT_STRATEGY).to_string(),
        }
    }

    pub fn preset(name: impl Into<String>, strategy: Option<&str>) -> Self {
        Self::new(SelectionMode::Preset(name.into()), strategy)
    }

    pub fn random(strategy: Option<&str>) -> Self {
        Self::new(SelectionMode::Random, strategy)
    }

    pub fn components(ids: ComponentIds, strategy: Option<&str>) -> Self {
        Self::new(SelectionMode::Components(ids), strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_is_moderate() {
        let request = FormulationRequest::random(None);
        assert_eq!(request.strategy, "moderate");
        assert_eq!(request.mode, SelectionMode::Random);
    }

    #[test]
    fn test_explicit_strategy_kept_verbatim() {
        let request = FormulationRequest::preset("office_desktop", Some("aggressive"));
        assert_eq!(request.strategy, "aggressive");
        assert_eq!(
            request.mode,
            SelectionMode::Preset("office_desktop".to_string())
        );
    }
}
