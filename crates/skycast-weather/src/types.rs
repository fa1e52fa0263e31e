use serde::{Deserialize, Serialize};

pub use skycast_core::TemperatureUnit;

/// Geographic coordinates.
///
/// Invariant: latitude in [-90, 90], longitude in [-180, 180]; `new` rejects
/// anything outside those ranges rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coordinates outside the valid latitude/longitude ranges.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("coordinates out of range: lat={latitude}, lon={longitude}")]
pub struct InvalidCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A location query: a free-text city name or a coordinate pair.
/// Exactly one representation per request, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Location {
    City(String),
    Coordinates(Coordinates),
}

impl Location {
    pub fn city(name: impl Into<String>) -> Self {
        Self::City(name.into())
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        Ok(Self::Coordinates(Coordinates::new(latitude, longitude)?))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::City(name) => write!(f, "{}", name),
            Location::Coordinates(c) => write!(f, "{:.4}, {:.4}", c.latitude, c.longitude),
        }
    }
}

/// Weather condition vocabulary from the upstream `weather[0].main` label.
///
/// Decoding is case-sensitive exact matching; anything outside the known
/// vocabulary is carried through as `Other` with the original label intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Drizzle,
    Thunderstorm,
    Mist,
    Haze,
    Fog,
    Other(String),
}

impl Condition {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Mist" => Self::Mist,
            "Haze" => Self::Haze,
            "Fog" => Self::Fog,
            other => Self::Other(other.to_string()),
        }
    }

    /// The upstream label this condition was decoded from.
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Mist => "Mist",
            Self::Haze => "Haze",
            Self::Fog => "Fog",
            Self::Other(label) => label,
        }
    }
}

/// Current weather conditions snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved city name reported by the upstream API
    pub city: String,
    pub coordinates: Coordinates,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    pub condition: Condition,
    pub description: String,
    /// Sunrise/sunset as epoch seconds
    pub sunrise: i64,
    pub sunset: i64,
}

/// One timestamped reading from the 3-hourly forecast feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Epoch seconds
    pub timestamp: i64,
    /// Upstream local-time text, e.g. "2024-02-01 12:00:00"
    pub local_time_text: String,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    pub condition: Condition,
}

/// Air Quality Index on the OpenWeatherMap 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQuality {
    pub index: u8,
}

impl AirQuality {
    pub fn label(&self) -> &'static str {
        match self.index {
            1 => "Good",
            2 => "Fair",
            3 => "Moderate",
            4 => "Poor",
            5 => "Very Poor",
            _ => "Unknown",
        }
    }
}
