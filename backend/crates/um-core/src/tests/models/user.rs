use crate::User;

use chrono::Utc;

fn test_user() -> User {
    User::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "$2b$04$abcdefghijklmnopqrstuu".to_string(),
        Utc::now(),
    )
}

#[test]
fn test_user_new_sets_matching_timestamps() {
    let user = test_user();

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_new_generates_distinct_ids() {
    assert_ne!(test_user().id, test_user().id);
}

#[test]
fn test_user_serialization_omits_password_hash() {
    let json = serde_json::to_value(test_user()).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "alice@example.com");
    assert!(json.get("created_at").is_some());
}

#[test]
fn test_user_debug_redacts_password_hash() {
    let user = test_user();
    let debug = format!("{:?}", user);

    assert!(!debug.contains(&user.password_hash));
    assert!(debug.contains("<redacted>"));
}
