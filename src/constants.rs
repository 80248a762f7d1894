// Application Constants
// Centralized constants to avoid magic numbers

use serde::{Deserialize, Serialize};

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default database connection port
pub const DEFAULT_DATABASE_PORT: u16 = 10627;

/// Default base URL for the stats API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Path of the top-10 leaderboard endpoint, relative to the API base URL
pub const TOP10_PATH: &str = "/stats/top10";

/// Inclusive range of values a game stat is allowed to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    /// Whether a value falls inside the allowed range
    pub fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the allowed range
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Game stats that carry a validation range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Health,
    Mana,
    Defense,
    Damage,
    Speed,
}

/// Static validation ranges, one entry per stat
pub const STAT_LIMITS: [(Stat, StatRange); 5] = [
    (Stat::Health, StatRange { min: 1, max: 1000 }),
    (Stat::Mana, StatRange { min: 0, max: 300 }),
    (Stat::Defense, StatRange { min: 0, max: 250 }),
    (Stat::Damage, StatRange { min: 0, max: 125 }),
    (Stat::Speed, StatRange { min: 1, max: 8 }),
];

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Health,
        Stat::Mana,
        Stat::Defense,
        Stat::Damage,
        Stat::Speed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Health => "health",
            Stat::Mana => "mana",
            Stat::Defense => "defense",
            Stat::Damage => "damage",
            Stat::Speed => "speed",
        }
    }

    /// Allowed range for this stat
    pub fn limits(self) -> StatRange {
        // STAT_LIMITS carries one entry per variant
        STAT_LIMITS
            .iter()
            .find(|(stat, _)| *stat == self)
            .map(|(_, range)| *range)
            .unwrap_or(StatRange { min: 0, max: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stat_range_is_well_formed() {
        for (stat, range) in STAT_LIMITS {
            assert!(
                range.min <= range.max,
                "{} has min {} > max {}",
                stat.as_str(),
                range.min,
                range.max
            );
        }
    }

    #[test]
    fn test_stat_limit_values() {
        assert_eq!(Stat::Health.limits(), StatRange { min: 1, max: 1000 });
        assert_eq!(Stat::Mana.limits(), StatRange { min: 0, max: 300 });
        assert_eq!(Stat::Defense.limits(), StatRange { min: 0, max: 250 });
        assert_eq!(Stat::Damage.limits(), StatRange { min: 0, max: 125 });
        assert_eq!(Stat::Speed.limits(), StatRange { min: 1, max: 8 });
    }

    #[test]
    fn test_every_stat_has_a_table_entry() {
        for stat in Stat::ALL {
            assert!(STAT_LIMITS.iter().any(|(s, _)| *s == stat));
        }
    }

    #[test]
    fn test_range_contains_and_clamp() {
        let speed = Stat::Speed.limits();
        assert!(speed.contains(1));
        assert!(speed.contains(8));
        assert!(!speed.contains(0));
        assert!(!speed.contains(9));
        assert_eq!(speed.clamp(0), 1);
        assert_eq!(speed.clamp(9), 8);
        assert_eq!(speed.clamp(5), 5);
    }
}
