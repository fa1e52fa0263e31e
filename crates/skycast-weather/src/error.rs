//! Weather-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No match for location: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Upstream API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl WeatherError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(location) => format!("No weather data found for \"{}\".", location),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
            Self::InvalidApiKey => "Weather API key is invalid. Check settings.".to_string(),
            Self::Parse(_) => "Received an unexpected response. Please try again.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "The weather service is experiencing issues. Please try again later.".to_string()
            }
            Self::Api { .. } => "Weather request failed. Please try again.".to_string(),
            Self::CacheError(_) => "Saved city could not be updated.".to_string(),
        }
    }

    /// Whether retrying the same request later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Api { status: 500.., .. }
        )
    }
}

/// Device geolocation errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Location permission is needed to show local weather.",
            Self::ServiceUnavailable => "Location services are unavailable.",
            Self::Timeout => "Finding your location took too long.",
            Self::Other(_) => "Could not determine your location.",
        }
    }
}
