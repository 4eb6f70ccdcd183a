//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify the provider against a mock forecast endpoint.

use gleam_weather::{ForecastResponse, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a forecast body
fn forecast_body(name: &str, temp_c: f64, code: i32, text: &str) -> serde_json::Value {
    serde_json::json!({
        "location": {"name": name, "region": "", "country": "France", "localtime": "2026-10-19 09:00"},
        "current": {
            "last_updated": "2026-10-19 08:45",
            "temp_c": temp_c,
            "feelslike_c": temp_c - 1.5,
            "humidity": 72,
            "uv": 2.0,
            "wind_kph": 14.4,
            "condition": {"text": text, "code": code, "icon": "//cdn.weatherapi.com/weather/64x64/day/296.png"}
        },
        "forecast": {"forecastday": [{"date": "2026-10-19"}]}
    })
}

#[tokio::test]
async fn test_fetch_success_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "1"))
        .and(query_param("lang", "en"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Paris", 12.3, 1183, "Light rain")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("test-key", &mock_server.uri()).unwrap();
    let response = provider.fetch("Paris", "en").await.unwrap();

    let obs = response.into_observation().unwrap();
    assert_eq!(obs.location_name, "Paris");
    assert_eq!(obs.temperature_c, 12.3);
    assert_eq!(obs.condition_code, 1183);
    assert_eq!(obs.condition_text, "Light rain");
}

#[tokio::test]
async fn test_fetch_coordinates_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "37.5,127.0"))
        .and(query_param("lang", "ko"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Seoul", 21.0, 1000, "맑음")),
        )
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("test-key", &mock_server.uri()).unwrap();
    let response = provider.fetch("37.5,127.0", "ko").await.unwrap();

    assert!(!response.is_error());
}

#[tokio::test]
async fn test_fetch_error_body_with_client_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("test-key", &mock_server.uri()).unwrap();
    let response = provider.fetch("zzqx", "en").await.unwrap();

    assert!(matches!(response, ForecastResponse::Failure { .. }));
    let err = response.into_observation().unwrap_err();
    assert!(err.to_string().contains("1006"), "Error should carry the code: {}", err);
}

#[tokio::test]
async fn test_fetch_invalid_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": 2006, "message": "API key is invalid."}
        })))
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("bad-key", &mock_server.uri()).unwrap();
    let response = provider.fetch("Seoul", "en").await.unwrap();

    assert!(response.is_error());
}

#[tokio::test]
async fn test_fetch_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("test-key", &mock_server.uri()).unwrap();
    let result = provider.fetch("Seoul", "en").await;

    match result {
        Err(WeatherError::Parse(msg)) => assert!(msg.contains("502"), "message: {}", msg),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_every_fetch_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Tokyo", 25.0, 1003, "Partly cloudy")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::with_base_url("test-key", &mock_server.uri()).unwrap();
    provider.fetch("Tokyo", "en").await.unwrap();
    provider.fetch("Tokyo", "en").await.unwrap();
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    let provider = WeatherProvider::with_base_url("test-key", "http://127.0.0.1:1").unwrap();
    let result = provider.fetch("Seoul", "en").await;

    assert!(matches!(result, Err(WeatherError::Network(_))));
}
