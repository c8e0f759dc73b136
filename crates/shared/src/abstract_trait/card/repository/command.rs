use crate::{
    domain::requests::card::{CreateCardRequest, UpdateCardRequest},
    errors::RepositoryError,
    model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateCardRequest,
    ) -> Result<CardModel, RepositoryError>;

    /// The update predicate carries `user_id`; a non-owner write cannot
    /// match a row regardless of what the caller checked beforehand.
    async fn update(
        &self,
        card_id: Uuid,
        user_id: Uuid,
        req: &UpdateCardRequest,
    ) -> Result<CardModel, RepositoryError>;

    async fn delete(&self, card_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError>;
}
