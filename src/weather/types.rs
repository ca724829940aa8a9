//! Response types for the OpenWeatherMap API.

use serde::Deserialize;

/// Current conditions, `/data/2.5/weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub main: Thermals,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Name of the reporting place, may be empty for open water.
    #[serde(default)]
    pub name: String,
    pub dt: i64,
}

impl CurrentWeather {
    /// The headline condition. The API lists several during mixed weather,
    /// the first one is the primary.
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
    /// Icon code, e.g. "10d".
    pub icon: String,
}

/// Envelope of `/data/2.5/air_pollution`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirQuality>,
}

/// One air-quality sample.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQuality {
    pub dt: i64,
    #[serde(rename = "main")]
    pub index: AqiReading,
    pub components: Components,
}

impl AirQuality {
    pub fn level(&self) -> AqiLevel {
        AqiLevel::from_index(self.index.aqi)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AqiReading {
    pub aqi: f64,
}

/// Pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Components {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

/// Qualitative AQI buckets, US EPA breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn from_index(value: f64) -> Self {
        if value <= 50.0 {
            AqiLevel::Good
        } else if value <= 100.0 {
            AqiLevel::Moderate
        } else if value <= 150.0 {
            AqiLevel::UnhealthyForSensitiveGroups
        } else if value <= 200.0 {
            AqiLevel::Unhealthy
        } else if value <= 300.0 {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }
}
