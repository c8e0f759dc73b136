use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct CardQueryRepository {
    db_pool: ConnectionPool,
}

impl CardQueryRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db_pool.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_all_by_user(&self, user_id: Uuid) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let records = sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                card_id,
                user_id,
                bank_name,
                card_name,
                card_number,
                holder_name,
                total_limit,
                available_limit,
                statement_date,
                due_date,
                created_at,
                updated_at
            FROM cards
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_all_by_user cards: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(records)
    }

    async fn find_by_id(&self, card_id: Uuid) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                card_id,
                user_id,
                bank_name,
                card_name,
                card_number,
                holder_name,
                total_limit,
                available_limit,
                statement_date,
                due_date,
                created_at,
                updated_at
            FROM cards
            WHERE card_id = $1
            "#,
        )
        .bind(card_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }
}
