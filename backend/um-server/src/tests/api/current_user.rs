use crate::{ApiError, CurrentUser};

use um_auth::AuthenticatedUser;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

#[tokio::test]
async fn test_extractor_reads_user_from_extensions() {
    let user = AuthenticatedUser {
        user_id: Uuid::new_v4(),
        email: "alice@example.com".to_string(),
    };
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(user.clone());
    let (mut parts, _) = request.into_parts();

    let CurrentUser(extracted) = CurrentUser::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert_eq!(extracted, user);
}

#[tokio::test]
async fn test_extractor_without_user_is_unauthorized() {
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
