use serde::Deserialize;

/// Registration request body. All four fields are required; anything
/// outside this exact shape is rejected before the handler runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
