pub mod error;
pub mod models;
pub mod validate;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::profile_update::ProfileUpdate;
pub use models::user::User;
pub use validate::{
    MIN_PASSWORD_LENGTH, normalize_email, validate_email, validate_name, validate_password,
};

#[cfg(test)]
mod tests;
