use crate::ApiError;

use um_core::validation::validate_name;
use um_db::DbError;
use um_identity::IdentityError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "user not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "user not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(validate_name("A").unwrap_err());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
    assert_eq!(json["error"]["message"], "name must be at least 2 characters");
}

#[tokio::test]
async fn test_identity_conflict_maps_to_409() {
    let error = ApiError::from(IdentityError::Conflict {
        message: "raw store text".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "email already in use");
}

#[tokio::test]
async fn test_invalid_credentials_maps_to_401() {
    let error = ApiError::from(IdentityError::invalid_credentials());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "email or password is incorrect");
}

#[tokio::test]
async fn test_unauthorized_hides_reason() {
    let error = ApiError::unauthorized("token expired at 1700000000");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "invalid or expired token");
}

#[tokio::test]
async fn test_store_failure_maps_to_generic_500() {
    let error = ApiError::from(IdentityError::from(DbError::Migration {
        message: "secret internal detail".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "internal server error");
}

#[tokio::test]
async fn test_invalid_id_and_forbidden_codes() {
    let (status, json) = body_json(ApiError::invalid_id("not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_ID");

    let (status, json) = body_json(ApiError::forbidden("nope")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "nope");
}
