use crate::{
    abstract_trait::card::repository::dashboard::CardDashboardRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::card::CardTotalsModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct CardDashboardRepository {
    db_pool: ConnectionPool,
}

impl CardDashboardRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CardDashboardRepositoryTrait for CardDashboardRepository {
    async fn totals_by_user(&self, user_id: Uuid) -> Result<CardTotalsModel, RepositoryError> {
        let mut conn = self.db_pool.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let totals = sqlx::query_as::<_, CardTotalsModel>(
            r#"
            SELECT
                SUM(total_limit)::BIGINT AS total_limit,
                SUM(available_limit)::BIGINT AS available_limit,
                COUNT(*) AS total_cards
            FROM cards
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in totals_by_user cards: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(totals)
    }
}
