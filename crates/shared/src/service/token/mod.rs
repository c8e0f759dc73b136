use crate::{
    abstract_trait::{
        jwt::DynJwtService, refresh_token::command::DynRefreshTokenCommandRepository,
        token::TokenServiceTrait,
    },
    domain::requests::refresh_token::CreateRefreshToken,
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{error, info};
use uuid::Uuid;

const REFRESH_TOKEN_TTL_HOURS: i64 = 24;

pub struct TokenService {
    token: DynJwtService,
    refresh: DynRefreshTokenCommandRepository,
}

impl TokenService {
    pub fn new(token: DynJwtService, refresh: DynRefreshTokenCommandRepository) -> Self {
        Self { token, refresh }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn create_access_token(&self, user_id: Uuid) -> Result<String, ServiceError> {
        match self.token.generate_token(user_id, "access") {
            Ok(token) => {
                info!("✅ Successfully generated access token for user_id: {user_id}");
                Ok(token)
            }
            Err(e) => {
                error!("❌ Failed to generate access token for user_id {user_id}: {e:?}");
                Err(e)
            }
        }
    }

    async fn create_refresh_token(&self, user_id: Uuid) -> Result<String, ServiceError> {
        let token = self.token.generate_token(user_id, "refresh")?;

        // one refresh session per user; a re-login replaces the old one
        if let Err(e) = self.refresh.delete_by_user_id(user_id).await {
            error!("❌ Failed to delete existing refresh token: {e:?}");
        }

        let expires_at = (Utc::now() + Duration::hours(REFRESH_TOKEN_TTL_HOURS)).naive_utc();

        let req = CreateRefreshToken {
            user_id,
            token: token.clone(),
            expires_at,
        };

        match self.refresh.create(&req).await {
            Ok(_) => {
                info!("✅ Created refresh token for user_id {user_id}");
                Ok(token)
            }
            Err(e) => {
                error!("❌ Failed to create refresh token: {e:?}");
                Err(ServiceError::from(e))
            }
        }
    }
}
