//! Token issuing and password hashing for the auth endpoints.

mod jwt;
mod password;

pub use jwt::{extract_bearer_token, issue_token, verify_token, TokenClaims};
pub use password::{hash_password, verify_password};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    InvalidToken,
    #[error("{0}")]
    MalformedHeader(String),
    #[error("token encoding failed: {0}")]
    Encoding(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
}
