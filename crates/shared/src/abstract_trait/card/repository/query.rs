use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryRepositoryTrait {
    /// All cards owned by `user_id`, newest first. The owner filter is
    /// part of the query itself, never applied after the fact.
    async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<CardModel>, RepositoryError>;

    async fn find_by_id(&self, card_id: Uuid) -> Result<CardModel, RepositoryError>;
}
