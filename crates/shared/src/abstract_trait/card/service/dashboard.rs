use crate::{
    domain::responses::{ApiResponse, DashboardSummary},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardDashboardService = Arc<dyn CardDashboardServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardDashboardServiceTrait {
    async fn summary(&self, user_id: Uuid) -> Result<ApiResponse<DashboardSummary>, ServiceError>;
}
