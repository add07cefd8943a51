use serde::{Deserialize, Serialize};

/// Strategy applied when the requested name is not defined in the catalog
pub const DEFAULT_STRATEGY: &str = "moderate";

/// Entropy tier controlling the length of a synthesized serial suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialEntropy {
    Low,
    #[default]
    Medium,
    High,
}

impl SerialEntropy {
    /// Number of random bytes drawn for the suffix
    pub fn byte_len(&self) -> usize {
        match self {
            SerialEntropy::Low => 2,
            SerialEntropy::Medium => 3,
            SerialEntropy::High => 4,
        }
    }
}

/// How much of a MAC address is randomized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacRandomization {
    /// Keep the full vendor OUI, randomize the last three octets
    #[default]
    OuiPreserve,
    /// Keep the first two OUI octets, randomize the last four
    Partial,
    /// Randomize all six octets
    Full,
}

impl MacRandomization {
    /// Number of leading OUI octets carried over verbatim
    pub fn preserved_octets(&self) -> usize {
        match self {
            MacRandomization::OuiPreserve => 3,
            MacRandomization::Partial => 2,
            MacRandomization::Full => 0,
        }
    }
}

/// A named randomization strategy as declared in the catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RandomizationStrategy {
    #[serde(default)]
    pub serial_entropy: SerialEntropy,
    #[serde(default)]
    pub mac_randomize: MacRandomization,
    #[serde(default)]
    pub description: Option<String>,
}

/// The strategy actually used for one formulation, with the name it was found under
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedStrategy {
    pub name: String,
    pub settings: RandomizationStrategy,
}

impl AppliedStrategy {
    pub fn new(name: impl Into<String>, settings: RandomizationStrategy) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_entropy_byte_lengths() {
        assert_eq!(SerialEntropy::Low.byte_len(), 2);
        assert_eq!(SerialEntropy::Medium.byte_len(), 3);
        assert_eq!(SerialEntropy::High.byte_len(), 4);
    }

    #[test]
    fn test_mac_randomization_preserved_octets() {
        assert_eq!(MacRandomization::OuiPreserve.preserved_octets(), 3);
        assert_eq!(MacRandomization::Partial.preserved_octets(), 2);
        assert_eq!(MacRandomization::Full.preserved_octets(), 0);
    }

    #[test]
    fn test_strategy_defaults() {
        let strategy: RandomizationStrategy = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(strategy.serial_entropy, SerialEntropy::Medium);
        assert_eq!(strategy.mac_randomize, MacRandomization::OuiPreserve);
        assert!(strategy.description.is_none());
    }

    #[test]
    fn test_strategy_deserialize() {
        let strategy: RandomizationStrategy = serde_yaml_ng::from_str(
            "serial_entropy: high\nmac_randomize: full\ndescription: Maximum entropy",
        )
        .unwrap();
        assert_eq!(strategy.serial_entropy, SerialEntropy::High);
        assert_eq!(strategy.mac_randomize, MacRandomization::Full);
        assert_eq!(strategy.description.as_deref(), Some("Maximum entropy"));
    }

    #[test]
    fn test_strategy_rejects_unknown_entropy() {
        let result: Result<RandomizationStrategy, _> =
            serde_yaml_ng::from_str("serial_entropy: extreme");
        assert!(result.is_err());
    }
}
