//! Load-cycle orchestration: fetch, reduce, classify, publish one snapshot.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::instrument;

use crate::backdrop::BackdropKey;
use crate::client::OwmClient;
use crate::digest::daily_digest;
use crate::error::WeatherError;
use crate::types::{AirQuality, CurrentConditions, ForecastSample, Location};

/// Immutable bundle of everything one display cycle needs.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    /// One representative forecast sample per day
    pub digest: Vec<ForecastSample>,
    /// `None` when the upstream has no air quality data
    pub air_quality: Option<AirQuality>,
    pub backdrop: BackdropKey,
    pub fetched_at: DateTime<Utc>,
}

/// Most recent committed snapshot, keyed by a load generation so a slow
/// response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SnapshotState {
    inner: Mutex<StateInner>,
}

#[derive(Debug, Default)]
struct StateInner {
    generation: u64,
    latest: Option<WeatherSnapshot>,
}

impl SnapshotState {
    /// Start a new load; any load begun earlier becomes stale.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.generation
    }

    /// Publish a snapshot. Returns false (and keeps the existing snapshot)
    /// when a newer load has begun since `generation` was issued.
    pub fn commit(&self, generation: u64, snapshot: WeatherSnapshot) -> bool {
        let mut inner = self.inner.lock();
        if generation != inner.generation {
            return false;
        }
        inner.latest = Some(snapshot);
        true
    }

    pub fn latest(&self) -> Option<WeatherSnapshot> {
        self.inner.lock().latest.clone()
    }
}

pub struct WeatherService {
    client: OwmClient,
    state: SnapshotState,
}

impl WeatherService {
    pub fn new(client: OwmClient) -> Self {
        Self {
            client,
            state: SnapshotState::default(),
        }
    }

    /// Run one full load cycle for `location`.
    ///
    /// Current conditions and forecast are hard requirements; air quality
    /// degrades to `None`. `local_hour` is the caller's wall-clock hour and
    /// feeds the backdrop classification. Returns `Ok(None)` when a newer
    /// load superseded this one while it was in flight; the result is then
    /// discarded and `latest()` keeps the newer snapshot. On error, nothing
    /// is committed, so any previously displayed snapshot stays current.
    #[instrument(skip(self), level = "info")]
    pub async fn load(
        &self,
        location: &Location,
        local_hour: u32,
    ) -> Result<Option<WeatherSnapshot>, WeatherError> {
        let generation = self.state.begin();

        let current = self.client.current(location).await?;
        let samples = self.client.forecast(location).await?;
        let air_quality = self.client.air_quality(current.coordinates).await;

        let backdrop = BackdropKey::classify(current.condition.label(), local_hour);
        let snapshot = WeatherSnapshot {
            backdrop,
            digest: daily_digest(&samples),
            air_quality,
            current,
            fetched_at: Utc::now(),
        };

        if !self.state.commit(generation, snapshot.clone()) {
            tracing::debug!("Discarding superseded weather snapshot for {}", location);
            return Ok(None);
        }

        tracing::info!(
            "Loaded weather for {} ({} forecast days)",
            snapshot.current.city,
            snapshot.digest.len()
        );
        Ok(Some(snapshot))
    }

    /// The most recently committed snapshot, if any load has succeeded.
    pub fn latest(&self) -> Option<WeatherSnapshot> {
        self.state.latest()
    }
}
