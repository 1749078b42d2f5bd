//! Drives `WeatherClient` through a scripted in-memory transport.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use google_weather_core::{
    ClientOptions, HttpRequest, HttpResponse, MappingError, Transport, TransportError,
    UnitsSystem, WeatherApiError, WeatherClient,
};

const CURRENT: &str = include_str!("fixtures/current_conditions.json");
const HOURLY: &str = include_str!("fixtures/hourly_forecast.json");
const DAILY: &str = include_str!("fixtures/daily_forecast.json");

#[derive(Debug, Clone)]
enum Reply {
    Status(u16, String),
    Timeout,
    Refused,
}

/// Records every request and answers each with the same scripted reply.
#[derive(Debug)]
struct FakeTransport {
    reply: Reply,
    seen: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn ok(body: &str) -> Arc<Self> {
        Self::new(Reply::Status(200, body.to_string()))
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Status(status, body) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Timeout => Err(TransportError::Timeout),
            Reply::Refused => Err(TransportError::Other("connection refused".into())),
        }
    }
}

fn client_with(transport: Arc<FakeTransport>) -> WeatherClient {
    let options = ClientOptions::new("secret-key")
        .with_language_code("fr")
        .with_units_system(UnitsSystem::Imperial)
        .with_timeout(Duration::from_secs(4));
    WeatherClient::with_transport(options, transport)
}

fn sorted_query(request: &HttpRequest) -> Vec<(String, String)> {
    let mut query = request.query.clone();
    query.sort();
    query
}

#[tokio::test]
async fn current_conditions_sends_exactly_the_base_parameters() {
    let transport = FakeTransport::ok(CURRENT);
    let client = client_with(transport.clone());

    let current = client.fetch_current_conditions(48.8566, 2.3522).await.unwrap();
    assert_eq!(current.relative_humidity, 42);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.url.ends_with("/currentConditions:lookup"));
    assert_eq!(
        sorted_query(request),
        vec![
            ("key".to_string(), "secret-key".to_string()),
            ("language_code".to_string(), "fr".to_string()),
            ("location.latitude".to_string(), "48.8566".to_string()),
            ("location.longitude".to_string(), "2.3522".to_string()),
            ("units_system".to_string(), "IMPERIAL".to_string()),
        ]
    );
    assert_eq!(request.timeout, Duration::from_secs(4));
    assert!(request.header("user-agent").is_some());
}

#[tokio::test]
async fn hourly_forecast_sets_hours_and_page_size() {
    for hours in [1u32, 24, 48] {
        let transport = FakeTransport::ok(HOURLY);
        let client = client_with(transport.clone());

        let hourly = client.fetch_hourly_forecast(1.5, -2.5, hours).await.unwrap();
        assert_eq!(hourly.forecast_hours.len(), 2);

        let request = &transport.requests()[0];
        assert!(request.url.ends_with("/forecast/hours:lookup"));
        assert_eq!(request.query_value("hours"), Some(hours.to_string().as_str()));
        assert_eq!(request.query_value("page_size"), Some(hours.to_string().as_str()));
    }
}

#[tokio::test]
async fn daily_forecast_sets_days_and_page_size() {
    let transport = FakeTransport::ok(DAILY);
    let client = client_with(transport.clone());

    let daily = client.fetch_daily_forecast(1.5, -2.5, 10).await.unwrap();
    assert_eq!(daily.forecast_days.len(), 2);

    let request = &transport.requests()[0];
    assert!(request.url.ends_with("/forecast/days:lookup"));
    assert_eq!(request.query_value("days"), Some("10"));
    assert_eq!(request.query_value("page_size"), Some("10"));
}

#[tokio::test]
async fn timeout_is_a_connection_error_on_every_endpoint() {
    let client = client_with(FakeTransport::new(Reply::Timeout));

    let current = client.fetch_current_conditions(0.0, 0.0).await.unwrap_err();
    let hourly = client.fetch_hourly_forecast(0.0, 0.0, 24).await.unwrap_err();
    let daily = client.fetch_daily_forecast(0.0, 0.0, 5).await.unwrap_err();

    for err in [current, hourly, daily] {
        assert!(err.is_timeout(), "{err}");
        assert!(matches!(err, WeatherApiError::Connection(TransportError::Timeout)));
    }
}

#[tokio::test]
async fn transport_failure_is_a_connection_error() {
    let client = client_with(FakeTransport::new(Reply::Refused));

    let err = client.fetch_current_conditions(0.0, 0.0).await.unwrap_err();
    assert!(err.is_connection());
    assert!(!err.is_timeout());
    assert_eq!(err.to_string(), "error connecting to API: connection refused");
}

#[tokio::test]
async fn forbidden_surfaces_service_message() {
    let transport = FakeTransport::new(Reply::Status(
        403,
        r#"{"error":{"message":"API key invalid"}}"#.into(),
    ));
    let client = client_with(transport);

    let err = client.fetch_hourly_forecast(0.0, 0.0, 48).await.unwrap_err();
    match err {
        WeatherApiError::Response { status, message, code } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key invalid");
            assert_eq!(code, None);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rejection_wins_over_a_body_that_would_map() {
    // A valid payload on a non-200 status must still be a rejection.
    let transport = FakeTransport::new(Reply::Status(500, CURRENT.into()));
    let client = client_with(transport);

    let err = client.fetch_current_conditions(0.0, 0.0).await.unwrap_err();
    assert!(err.is_response());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn incomplete_success_body_is_a_mapping_error() {
    let mut doc: serde_json::Value = serde_json::from_str(CURRENT).unwrap();
    doc.as_object_mut().unwrap().remove("temperature");
    let client = client_with(FakeTransport::ok(&doc.to_string()));

    let err = client.fetch_current_conditions(0.0, 0.0).await.unwrap_err();
    match err {
        WeatherApiError::Mapping(MappingError::MissingField { path }) => {
            assert_eq!(path, "temperature");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn one_client_serves_concurrent_calls() {
    let transport = FakeTransport::ok(DAILY);
    let client = client_with(transport.clone());

    let (a, b) = tokio::join!(
        client.fetch_daily_forecast(10.0, 20.0, 3),
        client.fetch_daily_forecast(30.0, 40.0, 7),
    );
    assert!(a.is_ok());
    assert!(b.is_ok());

    let mut days: Vec<String> = transport
        .requests()
        .iter()
        .filter_map(|r| r.query_value("days").map(str::to_owned))
        .collect();
    days.sort();
    assert_eq!(days, ["3", "7"]);
}
