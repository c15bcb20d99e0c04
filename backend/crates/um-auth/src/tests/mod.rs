
use chrono::{DateTime, Utc};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Whole-second instant so expiry arithmetic is exact
pub(crate) fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}
