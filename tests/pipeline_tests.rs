//! Integration tests for the trip planning pipeline using WireMock
//!
//! These tests mock the geocoding, weather and completion HTTP APIs to
//! verify pipeline behavior without touching the real services.

use greenroute::{
    GeocodeError, GeocodingClient, GreenRouteError, GroqClient, Temperature, TripPlanner,
    WeatherClient,
};
use rstest::rstest;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Helpers
// =============================================================================

fn planner_for(base_url: &str) -> TripPlanner {
    let client = reqwest::Client::new();
    TripPlanner::new(
        GeocodingClient::new(client.clone(), format!("{base_url}/geo")),
        WeatherClient::new(client.clone(), format!("{base_url}/weather")),
        GroqClient::new(
            client,
            Some("test-api-key".to_string()),
            format!("{base_url}/llm"),
            "test-model",
        )
        .expect("test key is present"),
    )
}

fn geocoding_response(name: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "name": name,
                "latitude": latitude,
                "longitude": longitude,
                "country": "India",
                "timezone": "Asia/Kolkata"
            }
        ]
    })
}

fn weather_response(temperature: f64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 19.0,
        "longitude": 72.9,
        "current_weather": {
            "temperature": temperature,
            "windspeed": 4.2,
            "weathercode": 1
        }
    })
}

fn completion_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

async fn mock_city(server: &MockServer, name: &str, latitude: f64, longitude: f64) {
    Mock::given(method("GET"))
        .and(path("/geo/search"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response(
            name, latitude, longitude,
        )))
        .mount(server)
        .await;
}

async fn mock_weather(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather/forecast"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mock_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/llm/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response(content)))
        .mount(server)
        .await;
}

// =============================================================================
// Coordinate Resolver
// =============================================================================

#[tokio::test]
async fn unresolved_city_halts_pipeline_before_later_stages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&server)
        .await;

    // Later stages must never be called
    Mock::given(method("GET"))
        .and(path("/weather/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_response(20.0)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/llm/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let planner = planner_for(&server.uri());
    let result = planner.plan("Nowhereville", "Bangalore").await;

    match result {
        Err(GreenRouteError::Geocoding(GeocodeError::NoMatch { city })) => {
            assert_eq!(city, "Nowhereville");
        }
        other => panic!("expected NoMatch error, got {other:?}"),
    }

    // The user-visible message names the unresolved city
    let err = planner.plan("Nowhereville", "Bangalore").await.unwrap_err();
    assert!(err.user_message().contains("Nowhereville"));
}

#[tokio::test]
async fn geocoder_transport_failure_is_not_reported_as_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let planner = planner_for(&server.uri());
    let result = planner.plan("Mumbai", "Bangalore").await;

    assert!(matches!(
        result,
        Err(GreenRouteError::Geocoding(GeocodeError::Request(_)))
    ));
}

// =============================================================================
// Weather Retriever
// =============================================================================

#[rstest]
#[case::server_error(ResponseTemplate::new(500))]
#[case::malformed_json(ResponseTemplate::new(200).set_body_string("not valid json"))]
#[case::missing_field(
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"latitude": 19.0}))
)]
#[tokio::test]
async fn weather_failure_degrades_to_unknown(#[case] weather: ResponseTemplate) {
    let server = MockServer::start().await;
    mock_city(&server, "Mumbai", 19.0728, 72.8826).await;
    mock_city(&server, "Bangalore", 12.9719, 77.5937).await;
    mock_weather(&server, weather).await;
    mock_completion(&server, "generated advisory").await;

    let planner = planner_for(&server.uri());
    let trip_plan = planner
        .plan("Mumbai", "Bangalore")
        .await
        .expect("weather failure must not abort the pipeline");

    assert_eq!(trip_plan.start_temperature, Temperature::Unknown);
    assert_eq!(trip_plan.destination_temperature, Temperature::Unknown);
    assert!(trip_plan.prompt.contains("Unknown°C"));
    assert_eq!(trip_plan.advisory, "generated advisory");
}

#[tokio::test]
async fn weather_retriever_extracts_current_temperature() {
    let server = MockServer::start().await;
    mock_city(&server, "Mumbai", 19.0728, 72.8826).await;
    mock_city(&server, "Bangalore", 12.9719, 77.5937).await;
    mock_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(weather_response(31.5)),
    )
    .await;
    mock_completion(&server, "generated advisory").await;

    let planner = planner_for(&server.uri());
    let trip_plan = planner.plan("Mumbai", "Bangalore").await.unwrap();

    assert_eq!(trip_plan.start_temperature, Temperature::Celsius(31.5));
    assert!(trip_plan.prompt.contains("Mumbai"));
    assert!(trip_plan.prompt.contains("Bangalore"));
    assert!(trip_plan.prompt.contains("31.5"));
}

// =============================================================================
// Advisory Generator
// =============================================================================

#[tokio::test]
async fn advisory_text_is_returned_verbatim() {
    let server = MockServer::start().await;
    mock_city(&server, "Mumbai", 19.0728, 72.8826).await;
    mock_city(&server, "Bangalore", 12.9719, 77.5937).await;
    mock_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(weather_response(31.5)),
    )
    .await;
    mock_completion(&server, "Route plan: take the coastal highway, leave at dawn.").await;

    let planner = planner_for(&server.uri());
    let trip_plan = planner.plan("Mumbai", "Bangalore").await.unwrap();

    assert_eq!(
        trip_plan.advisory,
        "Route plan: take the coastal highway, leave at dawn."
    );
}

#[tokio::test]
async fn identical_inputs_produce_identical_prompts() {
    let server = MockServer::start().await;
    mock_city(&server, "Mumbai", 19.0728, 72.8826).await;
    mock_city(&server, "Bangalore", 12.9719, 77.5937).await;
    mock_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(weather_response(31.5)),
    )
    .await;
    mock_completion(&server, "generated advisory").await;

    let planner = planner_for(&server.uri());
    let first = planner.plan("Mumbai", "Bangalore").await.unwrap();
    let second = planner.plan("Mumbai", "Bangalore").await.unwrap();

    assert_eq!(first.prompt, second.prompt);
    assert_eq!(first.advisory, second.advisory);
}
