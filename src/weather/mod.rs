//! Weather and air-quality data for the dashboard.

pub mod client;
pub mod icons;
pub mod types;

use std::path::Path;

use image::RgbaImage;

pub use client::WeatherService;
pub use types::{AirQuality, AqiLevel, Condition, CurrentWeather};

/// Everything one render of the dashboard needs. A `None` field marks data
/// that could not be fetched; the widget drawn from it degrades instead of
/// aborting the whole run.
pub struct Report {
    pub weather: Option<CurrentWeather>,
    pub air: Option<AirQuality>,
    pub icon: Option<RgbaImage>,
}

/// Fetch weather, condition icon and air quality in one go. Failures are
/// logged and leave the matching field empty.
pub fn gather(service: &WeatherService, cache_dir: &Path, lat: f64, lon: f64) -> Report {
    let weather = match service.current_weather(lat, lon) {
        Ok(weather) => Some(weather),
        Err(err) => {
            log::error!("Failed to fetch weather data: {:#}", err);
            None
        }
    };

    let icon = weather
        .as_ref()
        .and_then(CurrentWeather::condition)
        .and_then(|condition| {
            match icons::icon_image(service.agent(), cache_dir, &condition.icon) {
                Ok(icon) => Some(icon),
                Err(err) => {
                    log::error!("Error getting weather icon: {:#}", err);
                    None
                }
            }
        });

    let air = match service.current_air_quality(lat, lon) {
        Ok(air) => Some(air),
        Err(err) => {
            log::error!("Failed to fetch AQI data: {:#}", err);
            None
        }
    };

    Report { weather, air, icon }
}
