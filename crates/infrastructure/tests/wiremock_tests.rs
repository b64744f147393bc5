//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Directions adapter wired to the real client against wiremock
//! - Configuration to client hand-off

use application::{ApplicationError, ports::DirectionsPort};
use domain::{RouteQuery, TravelMode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::{AppConfig, DirectionsAdapter};

fn adapter_for(server: &MockServer) -> DirectionsAdapter {
    let mut config = AppConfig::for_testing();
    config.directions.base_url = server.uri();
    let client_config = config.directions.to_directions_config().unwrap();
    DirectionsAdapter::from_config(&client_config).unwrap()
}

fn query() -> RouteQuery {
    RouteQuery::new("Alexanderplatz", "Zoo").unwrap()
}

// ============================================================================
// Directions Adapter Tests
// ============================================================================

mod directions_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn forwards_query_and_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/directions/json"))
            .and(query_param("origin", "Alexanderplatz"))
            .and(query_param("destination", "Zoo"))
            .and(query_param("mode", "driving"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"OK","routes":[{"legs":[{"duration":{"text":"15 mins"},"distance":{"value":12000}}]}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let detail = adapter_for(&server)
            .travel_detail(TravelMode::Driving, &query())
            .await
            .unwrap();

        assert_eq!(detail.duration_text, "15 mins");
        assert!((detail.distance_km - 12.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn upstream_status_becomes_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/directions/json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .travel_detail(TravelMode::Bicycling, &query())
            .await
            .unwrap_err();

        match err {
            ApplicationError::ExternalService(msg) => {
                assert!(msg.contains("bicycling"));
                assert!(msg.contains("503"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn credential_does_not_leak_into_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/directions/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"REQUEST_DENIED","error_message":"Invalid key"}"#),
            )
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .travel_detail(TravelMode::Driving, &query())
            .await
            .unwrap_err();

        assert!(!err.to_string().contains("test-key"));
        assert!(err.to_string().contains("REQUEST_DENIED"));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;
    use infrastructure::ConfigError;

    #[test]
    fn missing_key_blocks_client_config() {
        let config = AppConfig::default();
        assert!(matches!(
            config.directions.to_directions_config(),
            Err(ConfigError::MissingApiKey)
        ));
    }
}
