//! Reduce the 3-hourly forecast feed to one representative sample per day.

use crate::types::ForecastSample;

/// Local-noon marker in the upstream `dt_txt` field.
const NOON_MARKER: &str = "12:00:00";

/// The feed carries one sample per 3-hour interval.
const SAMPLES_PER_DAY: usize = 8;

/// Pick one sample per calendar day from the raw feed.
///
/// Keeps every sample stamped at local noon. If the feed carries no noon
/// marker at all, falls back to every 8th sample by feed order starting at
/// index 0. The fallback assumes the feed starts at a day boundary; a feed
/// starting mid-day shifts every pick. Feed order is preserved either way.
pub fn daily_digest(samples: &[ForecastSample]) -> Vec<ForecastSample> {
    let noon: Vec<ForecastSample> = samples
        .iter()
        .filter(|s| s.local_time_text.contains(NOON_MARKER))
        .cloned()
        .collect();

    if !noon.is_empty() {
        return noon;
    }

    samples.iter().step_by(SAMPLES_PER_DAY).cloned().collect()
}
