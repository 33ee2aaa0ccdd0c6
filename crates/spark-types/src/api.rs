use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub device_id: String,
    #[serde(default)]
    pub public_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub access_token: String,
}

// -- Messages --

/// `role` stays a plain string here so an unknown role is a validation
/// error from the handler rather than a body decoding failure.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub device_id: String,
    pub role: String,
    pub text: String,
    #[serde(default)]
    pub symbols: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SinceQuery {
    /// Lower bound, exclusive. The chat page sends it as `since`.
    #[serde(alias = "since")]
    pub after: Option<String>,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
