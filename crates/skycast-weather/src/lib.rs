//! Weather domain for Skycast
//!
//! Upstream OpenWeatherMap client, daily forecast digest, backdrop
//! classification, unit conversion, and last-city persistence.

pub mod backdrop;
pub mod client;
pub mod digest;
pub mod error;
pub mod location;
pub mod service;
pub mod store;
pub mod suggest;
pub mod types;
pub mod units;

pub use backdrop::{BackdropKey, ConditionBucket, TimeOfDay};
pub use client::OwmClient;
pub use digest::daily_digest;
pub use error::{LocationError, WeatherError};
pub use service::{WeatherService, WeatherSnapshot};
pub use store::CityStore;
pub use types::*;
