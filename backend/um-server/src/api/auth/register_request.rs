use serde::Deserialize;

/// Missing fields deserialize as empty and are reported by validation
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
