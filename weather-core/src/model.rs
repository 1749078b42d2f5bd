//! Typed entity tree for the three lookup responses.
//!
//! Every field names its wire key explicitly with `#[serde(rename = ...)]`, so
//! the struct definitions double as the wire alias table. Required fields have
//! no default; optional ones are `Option` and decode absent (or `null`) as
//! `None`. Unknown wire keys are ignored.

pub mod codes;
pub mod common;
pub mod current;
pub mod daily;
pub mod hourly;

pub use codes::{
    CardinalDirection, IceThicknessUnit, MoonPhase, PrecipitationType, PrecipitationUnit,
    SpeedUnit, TemperatureUnit, VisibilityUnit, WeatherConditionType,
};
pub use common::{
    AirPressure, Date, DateTime, IceThickness, Interval, LocalizedText, Precipitation,
    PrecipitationProbability, QuantitativePrecipitationForecast, Temperature, TimeZone,
    Visibility, WeatherCondition, Wind, WindDirection, WindSpeed,
};
pub use current::{CurrentConditionsHistory, CurrentConditionsResponse};
pub use daily::{DailyForecastResponse, ForecastDay, ForecastDayPart, MoonEvents, SunEvents};
pub use hourly::{ForecastHour, HourlyForecastResponse};
