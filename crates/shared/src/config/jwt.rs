use crate::{abstract_trait::jwt::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_TTL_HOURS: i64 = 1;
const REFRESH_TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtConfig {
    secret: String,
}

impl JwtConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    fn ttl_hours(token_type: &str) -> i64 {
        if token_type == "refresh" {
            REFRESH_TOKEN_TTL_HOURS
        } else {
            ACCESS_TOKEN_TTL_HOURS
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid, token_type: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            token_type: token_type.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(Self::ttl_hours(token_type))).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Uuid, ServiceError> {
        let decoded = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
            _ => ServiceError::Jwt(e),
        })?;

        if decoded.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Uuid::parse_str(&decoded.claims.sub)
            .map_err(|_| ServiceError::InvalidTokenType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::jwt::JwtServiceTrait;

    #[test]
    fn roundtrip_access_token() {
        let jwt = JwtConfig::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id, "access").unwrap();
        let verified = jwt.verify_token(&token, "access").unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn access_token_rejected_as_refresh() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(Uuid::new_v4(), "access").unwrap();

        let err = jwt.verify_token(&token, "refresh").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTokenType));
    }

    #[test]
    fn tampered_secret_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");
        let token = jwt.generate_token(Uuid::new_v4(), "access").unwrap();

        assert!(other.verify_token(&token, "access").is_err());
    }
}
