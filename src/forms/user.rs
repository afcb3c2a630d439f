use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterForm {
    #[validate(max_length = 254)]
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 6)]
    #[validate(max_length = 128)]
    pub password: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    #[validate(pattern = r"\S")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct LoginForm {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// Emails are stored and compared lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
