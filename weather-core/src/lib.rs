//! Typed client for the Google Weather API.
//!
//! This crate defines:
//! - A client for the current conditions, hourly forecast and daily forecast lookups
//! - The transport seam the client performs its GET requests through
//! - The error taxonomy: connection failures, service rejections, mapping failures
//! - The domain model the JSON responses are mapped onto
//!
//! It is used by `google-weather-cli`, but has no opinion on configuration,
//! logging setup or output, which belong to the embedding application.
//!
//! ```no_run
//! use google_weather_core::{ClientOptions, WeatherClient};
//!
//! # async fn run() -> google_weather_core::Result<()> {
//! let client = WeatherClient::new(ClientOptions::new("API_KEY"));
//! let current = client.fetch_current_conditions(37.422, -122.084).await?;
//! println!("{} {}", current.temperature.degrees, current.temperature.unit);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod mapping;
pub mod model;
pub mod units;

pub use client::{
    ClientOptions, DEFAULT_BASE_URL, DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_HOURS,
    DEFAULT_LANGUAGE_CODE, DEFAULT_TIMEOUT, WeatherClient,
};
pub use error::{Result, WeatherApiError};
pub use http::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
pub use mapping::MappingError;
pub use model::{CurrentConditionsResponse, DailyForecastResponse, HourlyForecastResponse};
pub use units::{ParseUnitsSystemError, UnitsSystem};
