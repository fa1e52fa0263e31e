//! Persists the last successfully resolved city name across sessions.
//!
//! A single string key in a small JSON file under the config directory.
//! Absence is a valid state (first run); weather data itself is never
//! persisted, only the city the user last saw.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

const STORE_FILE: &str = "last_city.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredCity {
    city: String,
}

#[derive(Debug, Clone)]
pub struct CityStore {
    path: PathBuf,
}

impl CityStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(STORE_FILE),
        }
    }

    /// The last persisted city, or `None` on first run or unreadable state.
    pub fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredCity>(&contents) {
            Ok(stored) => Some(stored.city),
            Err(e) => {
                tracing::debug!("Discarding unreadable city store: {}", e);
                None
            }
        }
    }

    pub fn save(&self, city: &str) -> Result<(), WeatherError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WeatherError::CacheError(e.to_string()))?;
        }

        let contents = serde_json::to_string(&StoredCity {
            city: city.to_string(),
        })
        .map_err(|e| WeatherError::CacheError(e.to_string()))?;

        std::fs::write(&self.path, contents).map_err(|e| WeatherError::CacheError(e.to_string()))
    }

    pub fn clear(&self) -> Result<(), WeatherError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| WeatherError::CacheError(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_first_run_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(dir.path());

        store.save("London").unwrap();
        assert_eq!(store.load().as_deref(), Some("London"));

        // Overwrite with a newer city
        store.save("Tokyo").unwrap();
        assert_eq!(store.load().as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(dir.path());

        store.save("Delhi").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_store_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = CityStore::new(dir.path());

        std::fs::write(dir.path().join(STORE_FILE), "{not json").unwrap();
        assert_eq!(store.load(), None);
    }
}
