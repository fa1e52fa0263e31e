use anyhow::{Context, Result};
use chrono::Timelike;

use skycast_core::Config;
use skycast_weather::{location, units, CityStore, Location, OwmClient, WeatherService};

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let (config, _) = Config::load_validated()?;
    let api_key = config
        .weather
        .api_key
        .clone()
        .context("No API key configured (set OPENWEATHERMAP_API_KEY)")?;

    let store = CityStore::new(&config.config_dir);

    // A city argument wins; otherwise device location, then the last city
    let target = match std::env::args().nth(1) {
        Some(city) => Some(Location::city(city)),
        None => {
            let geo = location::current_coordinates().await;
            location::startup_location(geo, store.load().as_deref())
        }
    };

    let Some(target) = target else {
        println!("No location available. Pass a city name, e.g.: skycast London");
        return Ok(());
    };

    let client = OwmClient::with_base_url(&api_key, &config.weather.base_url)?;
    let service = WeatherService::new(client);
    let unit = config.weather.temperature_unit;
    let local_hour = chrono::Local::now().hour();

    match service.load(&target, local_hour).await {
        Ok(Some(snapshot)) => {
            if let Err(e) = store.save(&snapshot.current.city) {
                tracing::warn!("Could not persist last city: {}", e);
            }

            println!(
                "{}: {}° ({})",
                snapshot.current.city,
                units::display_temperature(snapshot.current.temperature_c, unit),
                snapshot.current.description,
            );
            println!(
                "Humidity {}%, wind {:.1} m/s",
                snapshot.current.humidity, snapshot.current.wind_speed_ms,
            );
            println!(
                "Air quality: {}",
                snapshot
                    .air_quality
                    .map(|aq| aq.label())
                    .unwrap_or("not available"),
            );
            println!("Backdrop: {}", snapshot.backdrop.asset_name());

            for sample in &snapshot.digest {
                let day = chrono::DateTime::from_timestamp(sample.timestamp, 0)
                    .map(|dt| dt.format("%a").to_string())
                    .unwrap_or_else(|| sample.local_time_text.clone());
                println!(
                    "  {}  {}°  {}",
                    day,
                    units::display_temperature(sample.temperature_c, unit),
                    sample.condition.label(),
                );
            }
        }
        Ok(None) => {
            // Superseded by a newer load; nothing to show for this one
        }
        Err(e) => {
            tracing::error!("Weather load failed: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}
