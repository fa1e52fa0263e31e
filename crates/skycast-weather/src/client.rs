//! OpenWeatherMap API client.

use std::time::Duration;

use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{AirQuality, Condition, Coordinates, CurrentConditions, ForecastSample, Location};

const OWM_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct OwmClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OwmClient {
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OWM_API_BASE)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// `q=<city>` or `lat=<lat>&lon=<lon>`, never both.
    fn location_query(location: &Location) -> String {
        match location {
            Location::City(name) => format!("q={}", urlencoding::encode(name)),
            Location::Coordinates(c) => format!("lat={}&lon={}", c.latitude, c.longitude),
        }
    }

    /// Fetch current conditions for a city name or coordinate pair.
    #[instrument(skip(self), level = "info")]
    pub async fn current(&self, location: &Location) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{}/weather?{}&units=metric&appid={}",
            self.base_url,
            Self::location_query(location),
            self.api_key,
        );

        let response = self.client.get(&url).send().await?;
        let resp: api::CurrentResponse = self.handle_response(response, location).await?;
        CurrentConditions::try_from(resp)
    }

    /// Fetch the raw 5-day/3-hour forecast feed, ascending by timestamp.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, location: &Location) -> Result<Vec<ForecastSample>, WeatherError> {
        let url = format!(
            "{}/forecast?{}&units=metric&appid={}",
            self.base_url,
            Self::location_query(location),
            self.api_key,
        );

        let response = self.client.get(&url).send().await?;
        let resp: api::ForecastResponse = self.handle_response(response, location).await?;

        resp.list
            .into_iter()
            .map(ForecastSample::try_from)
            .collect()
    }

    /// Fetch the air quality index for explicit coordinates.
    ///
    /// Optional data: any failure degrades to `None` so it can never fail a
    /// page load. Failures are logged, not surfaced.
    #[instrument(skip(self), level = "info")]
    pub async fn air_quality(&self, coordinates: Coordinates) -> Option<AirQuality> {
        let url = format!(
            "{}/air_pollution?lat={}&lon={}&appid={}",
            self.base_url, coordinates.latitude, coordinates.longitude, self.api_key,
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Air quality request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Air quality returned status {}", response.status());
            return None;
        }

        let body: api::AirResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Air quality parse error: {}", e);
                return None;
            }
        };

        let index = body.list.first().map(|entry| entry.main.aqi)?;
        Some(AirQuality { index })
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        location: &Location,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)))
        } else if status.as_u16() == 404 {
            Err(WeatherError::NotFound(location.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(WeatherError::InvalidApiKey)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(WeatherError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

impl TryFrom<api::CurrentResponse> for CurrentConditions {
    type Error = WeatherError;

    fn try_from(resp: api::CurrentResponse) -> Result<Self, WeatherError> {
        let entry = resp
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("missing weather entry".to_string()))?;

        let coordinates = Coordinates::new(resp.coord.lat, resp.coord.lon)
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(CurrentConditions {
            city: resp.name,
            coordinates,
            temperature_c: resp.main.temp,
            humidity: resp.main.humidity,
            wind_speed_ms: resp.wind.speed,
            condition: Condition::from_label(&entry.main),
            description: entry.description,
            sunrise: resp.sys.sunrise,
            sunset: resp.sys.sunset,
        })
    }
}

impl TryFrom<api::ForecastEntry> for ForecastSample {
    type Error = WeatherError;

    fn try_from(entry: api::ForecastEntry) -> Result<Self, WeatherError> {
        let weather = entry
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("missing weather entry".to_string()))?;

        Ok(ForecastSample {
            timestamp: entry.dt,
            local_time_text: entry.dt_txt,
            temperature_c: entry.main.temp,
            condition: Condition::from_label(&weather.main),
        })
    }
}

/// Raw OpenWeatherMap response shapes.
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub coord: Coord,
        pub main: MainData,
        pub weather: Vec<WeatherEntry>,
        pub wind: Wind,
        pub sys: Sys,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WeatherEntry {
        pub main: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        pub sunrise: i64,
        pub sunset: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub dt: i64,
        pub dt_txt: String,
        pub main: ForecastMain,
        pub weather: Vec<WeatherEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct AirResponse {
        pub list: Vec<AirEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct AirEntry {
        pub main: AirMain,
    }

    #[derive(Debug, Deserialize)]
    pub struct AirMain {
        pub aqi: u8,
    }
}
