use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    pub iat: u64,
}

pub fn generate_token(
    sub: impl Into<String>,
    secret: &str,
    lifetime_seconds: u64,
) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        sub: sub.into(),
        exp: now + lifetime_seconds,
        iat: now,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_token_carries_subject() {
        let token = generate_token("01J9USER", SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "01J9USER");
        assert_eq!(claims.exp, claims.iat + 60);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_token("01J9USER", SECRET, 60).unwrap();

        assert!(validate_token(&token, "another_secret_key_minimum_32_characters").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(validate_token("not-a-jwt", SECRET).is_err());
    }
}
