use serde::{Deserialize, Serialize};
use std::fmt;

/// Laptop vs. desktop classification of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Laptop,
    Desktop,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Laptop => "laptop",
            FormFactor::Desktop => "desktop",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "laptop" => Some(FormFactor::Laptop),
            "desktop" => Some(FormFactor::Desktop),
            _ => None,
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market tier qualifier of a category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Budget,
    Mainstream,
    Premium,
    HighEnd,
    HighPerformance,
    Enthusiast,
    Workstation,
}

impl Tier {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "budget" => Some(Tier::Budget),
            "mainstream" => Some(Tier::Mainstream),
            "premium" => Some(Tier::Premium),
            "high_end" => Some(Tier::HighEnd),
            "high_performance" => Some(Tier::HighPerformance),
            "enthusiast" => Some(Tier::Enthusiast),
            "workstation" => Some(Tier::Workstation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Mainstream => "mainstream",
            Tier::Premium => "premium",
            Tier::HighEnd => "high_end",
            Tier::HighPerformance => "high_performance",
            Tier::Enthusiast => "enthusiast",
            Tier::Workstation => "workstation",
        }
    }
}

/// Structured form of a catalog category string such as `laptop_premium`.
///
/// The raw string is split on `_` and matched token by token, so
/// `desktoplaptop` carries no form factor at all. A tag that names both
/// `laptop` and `desktop` is ambiguous and also has no form factor.
/// Whatever remains after removing the form-factor token is the tier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "String")]
pub struct CategoryTag {
    raw: String,
    form_factor: Option<FormFactor>,
    tier: Option<Tier>,
}

impl CategoryTag {
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw
            .trim()
            .split('_')
            .filter(|token| !token.is_empty())
            .collect();

        let form_factors: Vec<FormFactor> = tokens
            .iter()
            .filter_map(|token| FormFactor::from_token(token))
            .collect();
        let form_factor = match form_factors.as_slice() {
            [single] => Some(*single),
            _ => None,
        };

        let remainder = tokens
            .iter()
            .filter(|token| FormFactor::from_token(token).is_none())
            .copied()
            .collect::<Vec<_>>()
            .join("_");

        Self {
            raw: raw.to_string(),
            form_factor,
            tier: Tier::parse(&remainder),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn form_factor(&self) -> Option<FormFactor> {
        self.form_factor
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// Two tags match when both their form factor and tier agree
    pub fn matches(&self, other: &CategoryTag) -> bool {
        self.form_factor == other.form_factor && self.tier == other.tier
    }
}

impl From<String> for CategoryTag {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for CategoryTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Memory configuration pool chosen from a motherboard's tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryPool {
    Budget,
    HighEnd,
    Workstation,
    Mainstream,
}

impl MemoryPool {
    pub fn for_tier(tier: Option<Tier>) -> Self {
        match tier {
            Some(Tier::Budget) => MemoryPool::Budget,
            Some(Tier::Premium | Tier::HighEnd | Tier::Enthusiast) => MemoryPool::HighEnd,
            Some(Tier::Workstation) => MemoryPool::Workstation,
            _ => MemoryPool::Mainstream,
        }
    }

    /// Whether a memory configuration with this category belongs to the pool
    pub fn admits(&self, category: &CategoryTag) -> bool {
        match self {
            MemoryPool::Budget => category.tier() == Some(Tier::Budget),
            MemoryPool::HighEnd => matches!(
                category.tier(),
                Some(Tier::Premium | Tier::HighEnd | Tier::HighPerformance | Tier::Enthusiast)
            ),
            MemoryPool::Workstation => category.tier() == Some(Tier::Workstation),
            MemoryPool::Mainstream => category.tier() == Some(Tier::Mainstream),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryPool::Budget => "budget",
            MemoryPool::HighEnd => "high_end",
            MemoryPool::Workstation => "workstation",
            MemoryPool::Mainstream => "mainstream",
        }
    }
}
