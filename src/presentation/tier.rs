use crate::Probability;
use serde::Serialize;

/// Qualitative bucket of a virality probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Moderate,
    Low,
}

impl From<Probability> for Tier {
    fn from(p: Probability) -> Self {
        if p >= crate::TIER_HIGH {
            Self::High
        } else if p >= crate::TIER_MODERATE {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl Tier {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::High => "🚀 High virality potential",
            Self::Moderate => "⚠️ Moderate virality",
            Self::Low => "❌ Low virality — optimize content",
        }
    }
    /// Accent color of the insight banner.
    pub const fn color(&self) -> &'static str {
        match self {
            Self::High => "#22c55e",
            Self::Moderate => "#facc15",
            Self::Low => "#ef4444",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Moderate => write!(f, "moderate"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_tier() {
        assert_eq!(Tier::from(0.7), Tier::High);
        assert_eq!(Tier::from(0.4), Tier::Moderate);
    }

    #[test]
    fn tiers_partition_the_unit_interval() {
        for i in 0..=1000 {
            let p = i as f64 / 1000.0;
            let expected = match p {
                p if p >= 0.7 => Tier::High,
                p if p >= 0.4 => Tier::Moderate,
                _ => Tier::Low,
            };
            assert_eq!(Tier::from(p), expected, "p = {}", p);
        }
    }

    #[test]
    fn just_below_boundaries() {
        assert_eq!(Tier::from(0.7 - 1e-9), Tier::Moderate);
        assert_eq!(Tier::from(0.4 - 1e-9), Tier::Low);
        assert_eq!(Tier::from(0.0), Tier::Low);
        assert_eq!(Tier::from(1.0), Tier::High);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Moderate).unwrap(), "\"moderate\"");
        assert_eq!(Tier::Low.to_string(), "low");
    }
}
