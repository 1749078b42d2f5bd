//! Hourly forecast lookup response.

use serde::{Deserialize, Serialize};

use super::common::{
    AirPressure, DateTime, IceThickness, Interval, Precipitation, Temperature, TimeZone,
    Visibility, WeatherCondition, Wind,
};

/// One hour of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    /// The UTC hour this record is valid for.
    #[serde(rename = "interval")]
    pub interval: Interval,

    /// Local date and time at the location. Components may be unset.
    #[serde(rename = "displayDateTime")]
    pub display_date_time: DateTime,

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

    #[serde(rename = "wetBulbTemperature")]
    pub wet_bulb_temperature: Temperature,

    #[serde(rename = "precipitation")]
    pub precipitation: Precipitation,

    #[serde(rename = "airPressure")]
    pub air_pressure: AirPressure,

    #[serde(rename = "wind")]
    pub wind: Wind,

    #[serde(rename = "visibility")]
    pub visibility: Visibility,

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

    #[serde(rename = "iceThickness", default, skip_serializing_if = "Option::is_none")]
    pub ice_thickness: Option<IceThickness>,
}

/// Body of `forecast/hours:lookup`. One page of hours, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecastResponse {
    #[serde(rename = "forecastHours")]
    pub forecast_hours: Vec<ForecastHour>,

    #[serde(rename = "timeZone")]
    pub time_zone: TimeZone,

    /// Opaque continuation token. Never followed by this crate.
    #[serde(rename = "nextPageToken", default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl HourlyForecastResponse {
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
