//! OpenWeatherMap API client.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::weather::types::{AirPollutionResponse, AirQuality, CurrentWeather};

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const AIR_POLLUTION_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

// The program runs single-shot, a stuck request must not wedge it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WeatherService {
    api_key: String,
    agent: ureq::Agent,
}

impl WeatherService {
    pub fn new(api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        WeatherService { api_key, agent }
    }

    pub(crate) fn agent(&self) -> &ureq::Agent {
        &self.agent
    }

    /// Current conditions for the given coordinates, metric units.
    pub fn current_weather(&self, lat: f64, lon: f64) -> Result<CurrentWeather> {
        log::debug!("Fetching current weather for lat={} lon={}", lat, lon);
        let weather: CurrentWeather = self
            .agent
            .get(WEATHER_URL)
            .query("lat", &lat.to_string())
            .query("lon", &lon.to_string())
            .query("units", "metric")
            .query("lang", "en")
            .query("appid", &self.api_key)
            .call()
            .context("fetching current weather")?
            .into_json()
            .context("decoding current weather response")?;

        if let Some(condition) = weather.condition() {
            log::debug!(
                "Weather at {}: {:.1}°C ({:.1}..{:.1}), {}",
                weather.dt,
                weather.main.temp,
                weather.main.temp_min,
                weather.main.temp_max,
                condition.description
            );
        }
        Ok(weather)
    }

    /// Latest air-quality sample for the given coordinates.
    pub fn current_air_quality(&self, lat: f64, lon: f64) -> Result<AirQuality> {
        log::debug!("Fetching current AQI for lat={} lon={}", lat, lon);
        let response: AirPollutionResponse = self
            .agent
            .get(AIR_POLLUTION_URL)
            .query("lat", &lat.to_string())
            .query("lon", &lon.to_string())
            .query("appid", &self.api_key)
            .call()
            .context("fetching air quality")?
            .into_json()
            .context("decoding air quality response")?;

        let sample = response
            .list
            .into_iter()
            .next()
            .context("air quality response contained no samples")?;
        log::debug!(
            "AQI {} at {}: {:?}",
            sample.index.aqi,
            sample.dt,
            sample.components
        );
        Ok(sample)
    }
}
