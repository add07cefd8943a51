/// Randomization strategy names accepted on the command line and in the
/// config file
///
/// The catalog may define further strategies; these three are the ones the
/// tool offers to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyName {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl StrategyName {
    pub const ALL: [StrategyName; 3] = [
        StrategyName::Conservative,
        StrategyName::Moderate,
        StrategyName::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyName::Conservative => "conservative",
            StrategyName::Moderate => "moderate",
            StrategyName::Aggressive => "aggressive",
        }
    }
}

impl std::str::FromStr for StrategyName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid strategy: {}. Please specify 'conservative', 'moderate' or 'aggressive'",
                    s
                )
            })
    }
}

impl std::fmt::Display for StrategyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
