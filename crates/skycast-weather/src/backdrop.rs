//! Map a condition label and the local hour to a decorative backdrop key.

use serde::{Deserialize, Serialize};

/// Asset key used when a condition has no dedicated backdrop.
pub const DEFAULT_ASSET: &str = "default";

/// Time-of-day bucket from the local wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a 24-hour local hour. Pure function of the wall clock,
    /// no calendar dependency; the four buckets partition 0..24.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Noon,
            17..=19 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// Condition bucket for backdrop selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionBucket {
    Rain,
    Clouds,
    Clear,
    Snow,
    Storm,
    Fog,
    Default,
}

/// Priority-ordered substring table; first match on the lowercased label
/// wins, so "rain" beats "cloud" beats "clear" when several apply.
const BUCKET_TABLE: &[(&str, ConditionBucket)] = &[
    ("rain", ConditionBucket::Rain),
    ("cloud", ConditionBucket::Clouds),
    ("clear", ConditionBucket::Clear),
    ("snow", ConditionBucket::Snow),
    ("thunderstorm", ConditionBucket::Storm),
    ("mist", ConditionBucket::Fog),
    ("fog", ConditionBucket::Fog),
    ("haze", ConditionBucket::Fog),
];

impl ConditionBucket {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        BUCKET_TABLE
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Self::Default)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::Clouds => "clouds",
            Self::Clear => "clear",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Fog => "fog",
            Self::Default => DEFAULT_ASSET,
        }
    }
}

/// A (condition-bucket, time-of-day) pair the presentation layer resolves
/// to a background asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackdropKey {
    pub condition: ConditionBucket,
    pub time: TimeOfDay,
}

impl BackdropKey {
    pub fn classify(label: &str, local_hour: u32) -> Self {
        Self {
            condition: ConditionBucket::from_label(label),
            time: TimeOfDay::from_hour(local_hour),
        }
    }

    /// Asset name for this key, e.g. `"rain_morning"`. Unrecognized
    /// conditions resolve to the generic asset regardless of time bucket.
    pub fn asset_name(&self) -> String {
        if self.condition == ConditionBucket::Default {
            return DEFAULT_ASSET.to_string();
        }
        format!("{}_{}", self.condition.key(), self.time.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_partitions_all_hours() {
        for hour in 0..24 {
            let bucket = TimeOfDay::from_hour(hour);
            let expected = match hour {
                5..=11 => TimeOfDay::Morning,
                12..=16 => TimeOfDay::Noon,
                17..=19 => TimeOfDay::Evening,
                _ => TimeOfDay::Night,
            };
            assert_eq!(bucket, expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_rain_wins_regardless_of_other_substrings() {
        assert_eq!(ConditionBucket::from_label("Rain"), ConditionBucket::Rain);
        assert_eq!(
            ConditionBucket::from_label("light RAIN"),
            ConditionBucket::Rain
        );
        // "rain" outranks every other needle in the table
        assert_eq!(
            ConditionBucket::from_label("rain and clear clouds"),
            ConditionBucket::Rain
        );
    }

    #[test]
    fn test_clouds_beats_clear() {
        assert_eq!(
            ConditionBucket::from_label("cloudy but clear later"),
            ConditionBucket::Clouds
        );
    }

    #[test]
    fn test_bucket_vocabulary() {
        assert_eq!(ConditionBucket::from_label("Clear"), ConditionBucket::Clear);
        assert_eq!(ConditionBucket::from_label("Snow"), ConditionBucket::Snow);
        assert_eq!(
            ConditionBucket::from_label("Thunderstorm"),
            ConditionBucket::Storm
        );
        assert_eq!(ConditionBucket::from_label("Mist"), ConditionBucket::Fog);
        assert_eq!(ConditionBucket::from_label("Fog"), ConditionBucket::Fog);
        assert_eq!(ConditionBucket::from_label("Haze"), ConditionBucket::Fog);
        assert_eq!(
            ConditionBucket::from_label("Drizzle"),
            ConditionBucket::Default
        );
    }

    #[test]
    fn test_thunderstorm_at_fourteen_is_storm_noon() {
        let key = BackdropKey::classify("Thunderstorm", 14);
        assert_eq!(key.condition, ConditionBucket::Storm);
        assert_eq!(key.time, TimeOfDay::Noon);
        assert_eq!(key.asset_name(), "storm_noon");
    }

    #[test]
    fn test_unknown_condition_uses_generic_asset() {
        let key = BackdropKey::classify("Sandstorm", 8);
        assert_eq!(key.asset_name(), DEFAULT_ASSET);
    }
}
