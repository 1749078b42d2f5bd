//! Daily forecast lookup response, with day/night parts and sun and moon events.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::codes::MoonPhase;
use super::common::{
    Date, IceThickness, Interval, Precipitation, Temperature, TimeZone, WeatherCondition, Wind,
};

/// Daytime or nighttime half of a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDayPart {
    #[serde(rename = "interval")]
    pub interval: Interval,

    #[serde(rename = "weatherCondition")]
    pub weather_condition: WeatherCondition,

    #[serde(rename = "precipitation")]
    pub precipitation: Precipitation,

    /// Average direction, maximum speed and gust.
    #[serde(rename = "wind")]
    pub wind: Wind,

    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: i32,

    /// Maximum UV index over the part.
    #[serde(rename = "uvIndex")]
    pub uv_index: i32,

    #[serde(rename = "thunderstormProbability")]
    pub thunderstorm_probability: i32,

    #[serde(rename = "cloudCover")]
    pub cloud_cover: i32,

    #[serde(rename = "iceThickness", default, skip_serializing_if = "Option::is_none")]
    pub ice_thickness: Option<IceThickness>,
}

/// Sunrise and sunset. Either may be unset in polar regions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SunEvents {
    #[serde(rename = "sunriseTime", default, skip_serializing_if = "Option::is_none")]
    pub sunrise_time: Option<chrono::DateTime<Utc>>,

    #[serde(rename = "sunsetTime", default, skip_serializing_if = "Option::is_none")]
    pub sunset_time: Option<chrono::DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonEvents {
    #[serde(rename = "moonPhase")]
    pub moon_phase: MoonPhase,

    /// Zero or more; the moon may rise more than once, or not at all, in a day.
    #[serde(rename = "moonriseTimes", default)]
    pub moonrise_times: Vec<chrono::DateTime<Utc>>,

    #[serde(rename = "moonsetTimes", default)]
    pub moonset_times: Vec<chrono::DateTime<Utc>>,
}

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(rename = "interval")]
    pub interval: Interval,

    /// Local calendar date at the location.
    #[serde(rename = "displayDate")]
    pub display_date: Date,

    #[serde(rename = "daytimeForecast")]
    pub daytime_forecast: ForecastDayPart,

    #[serde(rename = "nighttimeForecast")]
    pub nighttime_forecast: ForecastDayPart,

    #[serde(rename = "maxTemperature")]
    pub max_temperature: Temperature,

    #[serde(rename = "minTemperature")]
    pub min_temperature: Temperature,

    #[serde(rename = "feelsLikeMaxTemperature")]
    pub feels_like_max_temperature: Temperature,

    #[serde(rename = "feelsLikeMinTemperature")]
    pub feels_like_min_temperature: Temperature,

    #[serde(rename = "maxHeatIndex")]
    pub max_heat_index: Temperature,

    #[serde(rename = "sunEvents")]
    pub sun_events: SunEvents,

    #[serde(rename = "moonEvents")]
    pub moon_events: MoonEvents,

    /// Ice accumulated over the whole day.
    #[serde(rename = "iceThickness", default, skip_serializing_if = "Option::is_none")]
    pub ice_thickness: Option<IceThickness>,
}

/// Body of `forecast/days:lookup`. One page of days, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastResponse {
    #[serde(rename = "forecastDays")]
    pub forecast_days: Vec<ForecastDay>,

    #[serde(rename = "timeZone")]
    pub time_zone: TimeZone,

    #[serde(rename = "nextPageToken", default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl DailyForecastResponse {
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
