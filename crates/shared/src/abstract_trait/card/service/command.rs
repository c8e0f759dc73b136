use crate::{
    domain::{
        requests::card::{CreateCardRequest, UpdateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandServiceTrait {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;

    async fn update(
        &self,
        user_id: Uuid,
        card_id: Uuid,
        req: &UpdateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;

    async fn delete(&self, user_id: Uuid, card_id: Uuid)
    -> Result<ApiResponse<()>, ServiceError>;
}
