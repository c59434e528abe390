use pl_core::ProfileUpdate;

use serde::Deserialize;

/// Partial profile update. Absent fields stay untouched.
///
/// Email and password are deliberately not part of this shape; a body that
/// tries to send them is rejected as an unknown field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub can_teach: Option<Vec<String>>,

    #[serde(default)]
    pub want_to_learn: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        ProfileUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
            can_teach: req.can_teach,
            want_to_learn: req.want_to_learn,
        }
    }
}
