use crate::{errors::RepositoryError, model::refresh_token::RefreshTokenModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRefreshTokenQueryRepository = Arc<dyn RefreshTokenQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RefreshTokenQueryRepositoryTrait {
    async fn find_by_token(&self, token: &str) -> Result<RefreshTokenModel, RepositoryError>;
}
