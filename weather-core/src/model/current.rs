//! Current conditions lookup response.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::common::{
    AirPressure, Precipitation, QuantitativePrecipitationForecast, Temperature, TimeZone,
    Visibility, WeatherCondition, Wind,
};

/// Changes in conditions over the last 24 hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditionsHistory {
    /// Current temperature minus the temperature 24 hours ago.
    #[serde(rename = "temperatureChange")]
    pub temperature_change: Temperature,

    #[serde(rename = "maxTemperature")]
    pub max_temperature: Temperature,

    #[serde(rename = "minTemperature")]
    pub min_temperature: Temperature,

    /// Precipitation accumulated over the last 24 hours.
    #[serde(rename = "qpf")]
    pub qpf: QuantitativePrecipitationForecast,
}

/// Body of `currentConditions:lookup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditionsResponse {
    #[serde(rename = "currentTime")]
    pub current_time: chrono::DateTime<Utc>,

    #[serde(rename = "timeZone")]
    pub time_zone: TimeZone,

    #[serde(rename = "weatherCondition")]
    pub weather_condition: WeatherCondition,

    #[serde(rename = "temperature")]
    pub temperature: Temperature,

    #[serde(rename = "feelsLikeTemperature")]
    pub feels_like_temperature: Temperature,

    #[serde(rename = "dewPoint")]
    pub dew_point: Temperature,

    #[serde(rename = "heatIndex")]
    pub heat_index: Temperature,

    #[serde(rename = "windChill")]
    pub wind_chill: Temperature,

    /// Probability now, accumulated amount over the last hour.
    #[serde(rename = "precipitation")]
    pub precipitation: Precipitation,

    #[serde(rename = "airPressure")]
    pub air_pressure: AirPressure,

    #[serde(rename = "wind")]
    pub wind: Wind,

    #[serde(rename = "visibility")]
    pub visibility: Visibility,

    #[serde(rename = "currentConditionsHistory")]
    pub current_conditions_history: CurrentConditionsHistory,

    /// Local sunrise (inclusive) to sunset (exclusive).
    #[serde(rename = "isDaytime")]
    pub is_daytime: bool,

    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: i32,

    #[serde(rename = "uvIndex")]
    pub uv_index: i32,

    #[serde(rename = "thunderstormProbability")]
    pub thunderstorm_probability: i32,

    #[serde(rename = "cloudCover")]
    pub cloud_cover: i32,
}
