use um_core::User;

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Creates a test User with sensible defaults
pub fn create_test_user(email: &str) -> User {
    create_test_user_at(email, 0)
}

/// Creates a test User whose timestamps are offset from now
pub fn create_test_user_at(email: &str, seconds_offset: i64) -> User {
    let now: DateTime<Utc> = (Utc::now() + Duration::seconds(seconds_offset)).trunc_subsecs(6);
    User::new(
        "Test User".to_string(),
        email.to_string(),
        "$2b$04$0123456789012345678901uZ2yT1xQxSR8j2rmI3tL1mSSSvGq0Vm".to_string(),
        now,
    )
}
