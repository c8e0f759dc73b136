use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynTokenService = Arc<dyn TokenServiceTrait + Send + Sync>;

#[async_trait]
pub trait TokenServiceTrait {
    async fn create_access_token(&self, user_id: Uuid) -> Result<String, ServiceError>;
    async fn create_refresh_token(&self, user_id: Uuid) -> Result<String, ServiceError>;
}
