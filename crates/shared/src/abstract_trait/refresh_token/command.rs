use crate::{
    domain::requests::refresh_token::CreateRefreshToken, errors::RepositoryError,
    model::refresh_token::RefreshTokenModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRefreshTokenCommandRepository =
    Arc<dyn RefreshTokenCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RefreshTokenCommandRepositoryTrait {
    async fn create(&self, req: &CreateRefreshToken) -> Result<RefreshTokenModel, RepositoryError>;

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, RepositoryError>;
}
