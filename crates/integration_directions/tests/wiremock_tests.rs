//! Integration tests for the directions client (wiremock-based)

use std::time::Duration;

use domain::TravelMode;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
};

fn config_for_mock(base_url: &str) -> DirectionsConfig {
    DirectionsConfig {
        timeout_secs: 2,
        ..DirectionsConfig::for_testing(base_url)
    }
}

const fn sample_route_json() -> &'static str {
    r#"{
        "geocoded_waypoints": [],
        "status": "OK",
        "routes": [{
            "summary": "Karl-Liebknecht-Str.",
            "legs": [{
                "start_address": "Alexanderplatz, 10178 Berlin, Germany",
                "end_address": "Zoologischer Garten, 10787 Berlin, Germany",
                "duration": { "text": "15 mins", "value": 912 },
                "distance": { "text": "5.0 km", "value": 5000 }
            }]
        }]
    }"#
}

#[tokio::test]
async fn test_fetch_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .and(query_param("origin", "Alexanderplatz, Berlin"))
        .and(query_param("destination", "Zoo, Berlin"))
        .and(query_param("mode", "bicycling"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let detail = client
        .fetch(TravelMode::Bicycling, "Alexanderplatz, Berlin", "Zoo, Berlin")
        .await
        .unwrap();

    assert_eq!(detail.duration_text, "15 mins");
    assert!((detail.distance_km - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_fetch_sends_driving_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .and(query_param("mode", "driving"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.fetch(TravelMode::Driving, "A", "B").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fetch_zero_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#),
        )
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .fetch(TravelMode::Bicycling, "Atlantis", "Berlin")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Provider { ref status, .. } if status == "ZERO_RESULTS"));
}

#[tokio::test]
async fn test_fetch_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    for mode in TravelMode::ALL {
        let err = client.fetch(mode, "A", "B").await.unwrap_err();
        assert!(matches!(err, DirectionsError::UpstreamStatus { status: 503 }));
        assert!(!err.is_transport());
    }
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .fetch(TravelMode::Driving, "A", "B")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_ok_without_legs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "status": "OK", "routes": [{ "legs": [] }] }"#),
        )
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .fetch(TravelMode::Driving, "A", "B")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::NoRoute));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_route_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = DirectionsConfig {
        timeout_secs: 1,
        ..DirectionsConfig::for_testing(&server.uri())
    };
    let client = GoogleDirectionsClient::new(&config).unwrap();
    let err = client
        .fetch(TravelMode::Bicycling, "A", "B")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Timeout { timeout_secs: 1 }));
    assert!(err.is_transport());
}
