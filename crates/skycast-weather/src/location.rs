//! Device geolocation boundary and the startup fallback policy.

use crate::error::LocationError;
use crate::types::{Coordinates, Location};

/// Ask the platform for the current device coordinates.
///
/// No platform backend is wired up on this target yet; callers must handle
/// the error path the same way they handle a permission denial.
pub async fn current_coordinates() -> Result<Coordinates, LocationError> {
    Err(LocationError::ServiceUnavailable)
}

/// Decide where the initial load should point.
///
/// Device coordinates when granted; otherwise the persisted last city;
/// otherwise nothing, which the caller renders as the empty first-run state.
/// A denial is never fatal. Both inputs are passed in so the policy stays a
/// pure function.
pub fn startup_location(
    geo: Result<Coordinates, LocationError>,
    last_city: Option<&str>,
) -> Option<Location> {
    match geo {
        Ok(coordinates) => Some(Location::Coordinates(coordinates)),
        Err(e) => {
            tracing::info!("Device location unavailable ({}), falling back", e);
            last_city.map(Location::city)
        }
    }
}
