use um_core::User;

/// Outcome of a successful registration or sign-in
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}
