//! Client for the three Weather API lookups.
//!
//! Each lookup is split into a pure `build_*` step that produces an
//! [`HttpRequest`], the transport round-trip, and a pure `parse_*` step that
//! classifies the [`HttpResponse`] and maps its body. The `fetch_*` methods
//! chain the three. Outcome precedence is fixed: a transport failure never
//! reaches the status check, and a non-200 status never reaches the mapper.

use std::{fmt, sync::Arc, time::Duration};

use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    error::{Result, WeatherApiError},
    http::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
    mapping,
    model::{CurrentConditionsResponse, DailyForecastResponse, HourlyForecastResponse},
    units::UnitsSystem,
};

pub const DEFAULT_BASE_URL: &str = "https://weather.googleapis.com/v1";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_FORECAST_HOURS: u32 = 48;
pub const DEFAULT_FORECAST_DAYS: u32 = 10;

// The service rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

const CURRENT_CONDITIONS_ENDPOINT: &str = "currentConditions:lookup";
const HOURLY_FORECAST_ENDPOINT: &str = "forecast/hours:lookup";
const DAILY_FORECAST_ENDPOINT: &str = "forecast/days:lookup";

/// Connection parameters shared by every call of a [`WeatherClient`].
#[derive(Clone, PartialEq)]
pub struct ClientOptions {
    api_key: String,
    language_code: String,
    units_system: UnitsSystem,
    referrer: Option<String>,
    timeout: Duration,
    base_url: String,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language_code: DEFAULT_LANGUAGE_CODE.to_owned(),
            units_system: UnitsSystem::default(),
            referrer: None,
            timeout: DEFAULT_TIMEOUT,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// BCP-47 code for localized descriptions, e.g. `"de"`.
    #[must_use]
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    #[must_use]
    pub fn with_units_system(mut self, units_system: UnitsSystem) -> Self {
        self.units_system = units_system;
        self
    }

    /// Sent as `Referer`, for keys restricted to HTTP referrers. Empty means none.
    #[must_use]
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        let referrer = referrer.into();
        self.referrer = (!referrer.is_empty()).then_some(referrer);
        self
    }

    /// Budget for each whole request/response exchange.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_owned();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn units_system(&self) -> UnitsSystem {
        self.units_system
    }

    pub fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &"<redacted>")
            .field("language_code", &self.language_code)
            .field("units_system", &self.units_system)
            .field("referrer", &self.referrer)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Typed client for current conditions, hourly and daily forecasts.
///
/// Holds only immutable configuration and a shared transport, so one client
/// can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    options: ClientOptions,
    transport: Arc<dyn Transport>,
}

impl WeatherClient {
    /// Creates a client that talks to the service with `reqwest`.
    pub fn new(options: ClientOptions) -> Self {
        Self::with_transport(options, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Self {
        Self { options, transport }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn build_current_conditions(&self, latitude: f64, longitude: f64) -> HttpRequest {
        self.build_request(CURRENT_CONDITIONS_ENDPOINT, latitude, longitude, Vec::new())
    }

    /// `hours` is also sent as `page_size`, so one page holds every hour asked for.
    pub fn build_hourly_forecast(&self, latitude: f64, longitude: f64, hours: u32) -> HttpRequest {
        let hours = hours.to_string();
        self.build_request(
            HOURLY_FORECAST_ENDPOINT,
            latitude,
            longitude,
            vec![("hours", hours.clone()), ("page_size", hours)],
        )
    }

    pub fn build_daily_forecast(&self, latitude: f64, longitude: f64, days: u32) -> HttpRequest {
        let days = days.to_string();
        self.build_request(
            DAILY_FORECAST_ENDPOINT,
            latitude,
            longitude,
            vec![("days", days.clone()), ("page_size", days)],
        )
    }

    pub fn parse_current_conditions(
        &self,
        response: HttpResponse,
    ) -> Result<CurrentConditionsResponse> {
        parse_response(response)
    }

    pub fn parse_hourly_forecast(&self, response: HttpResponse) -> Result<HourlyForecastResponse> {
        parse_response(response)
    }

    pub fn parse_daily_forecast(&self, response: HttpResponse) -> Result<DailyForecastResponse> {
        parse_response(response)
    }

    pub async fn fetch_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditionsResponse> {
        let request = self.build_current_conditions(latitude, longitude);
        let response = self.execute(&request).await?;
        self.parse_current_conditions(response)
    }

    /// Fetches one page of `hours` hourly records; see [`DEFAULT_FORECAST_HOURS`].
    pub async fn fetch_hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        hours: u32,
    ) -> Result<HourlyForecastResponse> {
        let request = self.build_hourly_forecast(latitude, longitude, hours);
        let response = self.execute(&request).await?;
        self.parse_hourly_forecast(response)
    }

    /// Fetches one page of `days` daily records; see [`DEFAULT_FORECAST_DAYS`].
    pub async fn fetch_daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> Result<DailyForecastResponse> {
        let request = self.build_daily_forecast(latitude, longitude, days);
        let response = self.execute(&request).await?;
        self.parse_daily_forecast(response)
    }

    fn build_request(
        &self,
        endpoint: &str,
        latitude: f64,
        longitude: f64,
        params: Vec<(&str, String)>,
    ) -> HttpRequest {
        let options = &self.options;

        let mut query: Vec<(String, String)> = params
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect();
        query.extend([
            ("key".to_owned(), options.api_key.clone()),
            ("language_code".to_owned(), options.language_code.clone()),
            ("units_system".to_owned(), options.units_system.as_str().to_owned()),
            ("location.latitude".to_owned(), latitude.to_string()),
            ("location.longitude".to_owned(), longitude.to_string()),
        ]);

        let mut headers = vec![("User-Agent".to_owned(), USER_AGENT.to_owned())];
        if let Some(referrer) = &options.referrer {
            headers.push(("Referer".to_owned(), referrer.clone()));
        }

        HttpRequest {
            url: format!("{}/{endpoint}", options.base_url),
            query,
            headers,
            timeout: options.timeout,
        }
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(url = %request.url, query = ?loggable_query(request), "GET");

        let response = self
            .transport
            .get(request)
            .await
            .inspect_err(|err| debug!(url = %request.url, error = %err, "transport failed"))?;

        debug!(url = %request.url, status = response.status, "received response");
        Ok(response)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if response.status != 200 {
        let (message, code) = error_details(&response);
        warn!(status = response.status, code = ?code, %message, "weather API rejected request");
        return Err(WeatherApiError::Response {
            status: response.status,
            message,
            code,
        });
    }

    mapping::from_json(&response.body).map_err(|err| {
        debug!(path = err.path(), error = %err, "response did not match model");
        WeatherApiError::Mapping(err)
    })
}

/// Extracts `error.message` and `error.status` from a rejection body.
fn error_details(response: &HttpResponse) -> (String, Option<String>) {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                message: Some(message),
                status,
            },
        }) => (message, status),
        Ok(ErrorEnvelope { error }) => (fallback_message(response), error.status),
        Err(_) => (fallback_message(response), None),
    }
}

fn fallback_message(response: &HttpResponse) -> String {
    let body = response.body.trim();
    if !body.is_empty() {
        return truncate_body(body);
    }

    let reason = reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason());
    match reason {
        Some(reason) => format!("HTTP {} {reason}", response.status),
        None => format!("HTTP {}", response.status),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

fn loggable_query(request: &HttpRequest) -> Vec<(&str, &str)> {
    request
        .query
        .iter()
        .map(|(name, value)| match name.as_str() {
            "key" => ("key", "***"),
            _ => (name.as_str(), value.as_str()),
        })
        .collect()
}
