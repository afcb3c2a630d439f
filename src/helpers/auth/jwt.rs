use super::AuthError;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account email
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signed HS256 token for `email`, valid for `ttl`.
pub fn issue_token(email: &str, secret: &[u8], ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: email.to_string(),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|err| AuthError::Encoding(err.to_string()))
}

/// Check signature and expiry, returning the claims.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &Validation::default())
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::InvalidToken,
        })
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(AuthError::MalformedHeader(
            "Invalid Authorization header format".to_string(),
        ));
    }
    if !parts[0].eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader(
            "Expected Bearer scheme in Authorization header".to_string(),
        ));
    }
    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token("alice@example.com", SECRET, Duration::minutes(30)).unwrap();
        let claims = verify_token(&token, SECRET).expect("valid token");
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // well past the default 60s leeway
        let token = issue_token("alice@example.com", SECRET, Duration::hours(-2)).unwrap();
        assert_eq!(verify_token(&token, SECRET).unwrap_err(), AuthError::Expired);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("alice@example.com", SECRET, Duration::minutes(30)).unwrap();
        assert_eq!(
            verify_token(&token, b"other-secret").unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            verify_token("not.a.jwt", SECRET).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        let token = extract_bearer_token("Bearer abc.def.ghi").expect("Failed to extract token");
        assert_eq!(token, "abc.def.ghi");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
    }
}
