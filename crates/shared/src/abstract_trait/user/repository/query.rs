use crate::{errors::RepositoryError, model::user::UserModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserModel, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<UserModel, RepositoryError>;
}
