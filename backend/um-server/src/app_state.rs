use um_auth::JwtValidator;
use um_identity::IdentityService;

use std::sync::Arc;

/// Shared, immutable handler state
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService>,
    pub validator: Arc<JwtValidator>,
}
