use crate::{
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<CardResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        user_id: Uuid,
        card_id: Uuid,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}
