/// GDP threshold tier deciding which countries can appear in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lower GDP bound (exclusive) a country needs to be eligible.
    /// `None` means every country is eligible, whatever its GDP.
    pub fn gdp_threshold(self) -> Option<f64> {
        match self {
            Difficulty::Easy => Some(500_000_000_000.0),
            Difficulty::Medium => Some(10_000_000_000.0),
            Difficulty::Hard => None,
        }
    }
}

impl From<&str> for Difficulty {
    // Unknown tiers fall through to hard, which does not filter.
    fn from(value: &str) -> Self {
        match value {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}
