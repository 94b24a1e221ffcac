// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use mt2native::error::{ServiceError, INTERNAL_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE};

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ServiceError::MissingFields,
        ServiceError::Config("missing project id".to_string()),
        ServiceError::TranslationApi("API error".to_string()),
        ServiceError::RefinementApi("API error".to_string()),
        ServiceError::Internal("deserialization failed".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_missing_fields_displays_wire_message() {
    let error = ServiceError::MissingFields;
    assert_eq!(format!("{}", error), VALIDATION_ERROR_MESSAGE);
}

#[test]
fn test_translation_api_error_keeps_detail() {
    let error = ServiceError::TranslationApi("Connection refused".to_string());
    assert!(format!("{}", error).contains("Connection refused"));
}

#[test]
fn test_refinement_api_error_keeps_detail() {
    let error = ServiceError::RefinementApi("Quota exceeded".to_string());
    assert!(format!("{}", error).contains("Quota exceeded"));
}

#[test]
fn test_config_error_keeps_detail() {
    let error = ServiceError::Config("google.api_key is not set".to_string());
    assert!(format!("{}", error).contains("google.api_key"));
}

async fn response_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_fields_maps_to_400_with_exact_body() {
    let response = ServiceError::MissingFields.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_body_json(response).await;
    assert_eq!(json["error"], "Text and target language are required.");
}

#[tokio::test]
async fn test_other_errors_map_to_500_with_generic_body() {
    let errors = vec![
        ServiceError::TranslationApi("HTTP 503: backend down".to_string()),
        ServiceError::RefinementApi("HTTP 429: rate limited".to_string()),
        ServiceError::Internal("JSON deserialization error".to_string()),
        ServiceError::Config("missing key".to_string()),
    ];

    for error in errors {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response_body_json(response).await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    }
}

#[tokio::test]
async fn test_error_responses_never_leak_provider_detail() {
    let response =
        ServiceError::TranslationApi("HTTP 403: key AIzaSySecret rejected".to_string())
            .into_response();

    let json = response_body_json(response).await;
    let body = json.to_string();
    assert!(!body.contains("AIzaSy"));
    assert!(!body.contains("403"));
}
