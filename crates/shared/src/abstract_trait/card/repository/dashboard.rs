use crate::{errors::RepositoryError, model::card::CardTotalsModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardDashboardRepository = Arc<dyn CardDashboardRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardDashboardRepositoryTrait {
    async fn totals_by_user(&self, user_id: Uuid) -> Result<CardTotalsModel, RepositoryError>;
}
