use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
