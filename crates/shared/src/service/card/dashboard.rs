use crate::{
    abstract_trait::card::{
        repository::dashboard::DynCardDashboardRepository,
        service::dashboard::CardDashboardServiceTrait,
    },
    domain::responses::{ApiResponse, DashboardSummary},
    errors::ServiceError,
    utils::format_currency,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CardDashboardService {
    dashboard: DynCardDashboardRepository,
}

impl CardDashboardService {
    pub fn new(dashboard: DynCardDashboardRepository) -> Self {
        Self { dashboard }
    }
}

#[async_trait]
impl CardDashboardServiceTrait for CardDashboardService {
    async fn summary(&self, user_id: Uuid) -> Result<ApiResponse<DashboardSummary>, ServiceError> {
        info!("📊 Fetching dashboard totals for user_id={user_id}");

        let totals = self.dashboard.totals_by_user(user_id).await.map_err(|e| {
            error!("❌ Failed to get card totals for user_id {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let summary = DashboardSummary::from(totals);

        info!(
            "✅ Dashboard for user_id={user_id}: limit={} available={} debt={}",
            format_currency(summary.total_limit),
            format_currency(summary.available_limit),
            format_currency(summary.total_debt),
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Dashboard retrieved successfully".into(),
            data: summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::card::repository::dashboard::CardDashboardRepositoryTrait,
        errors::RepositoryError, model::card::CardTotalsModel,
    };
    use std::sync::Arc;

    struct MockDashboardRepository {
        totals: CardTotalsModel,
    }

    #[async_trait]
    impl CardDashboardRepositoryTrait for MockDashboardRepository {
        async fn totals_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<CardTotalsModel, RepositoryError> {
            Ok(CardTotalsModel {
                total_limit: self.totals.total_limit,
                available_limit: self.totals.available_limit,
                total_cards: self.totals.total_cards,
            })
        }
    }

    #[tokio::test]
    async fn totals_for_two_cards() {
        // cards with limits {10000, 5000} and available {4000, 1000}
        let service = CardDashboardService::new(Arc::new(MockDashboardRepository {
            totals: CardTotalsModel {
                total_limit: Some(15000),
                available_limit: Some(5000),
                total_cards: Some(2),
            },
        }));

        let response = service.summary(Uuid::new_v4()).await.unwrap();

        assert_eq!(response.data.total_limit, 15000);
        assert_eq!(response.data.available_limit, 5000);
        assert_eq!(response.data.total_debt, 10000);
    }

    #[tokio::test]
    async fn empty_card_set_yields_zero_totals() {
        let service = CardDashboardService::new(Arc::new(MockDashboardRepository {
            totals: CardTotalsModel {
                total_limit: None,
                available_limit: None,
                total_cards: Some(0),
            },
        }));

        let response = service.summary(Uuid::new_v4()).await.unwrap();

        assert_eq!(response.data.total_limit, 0);
        assert_eq!(response.data.total_debt, 0);
        assert_eq!(response.data.total_cards, 0);
    }
}
