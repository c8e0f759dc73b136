use crate::{
    abstract_trait::card::repository::command::CardCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::card::{CreateCardRequest, UpdateCardRequest},
    errors::RepositoryError,
    model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct CardCommandRepository {
    db_pool: ConnectionPool,
}

impl CardCommandRepository {
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
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateCardRequest,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (
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
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING
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
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&req.bank_name)
        .bind(&req.card_name)
        .bind(&req.card_number)
        .bind(&req.holder_name)
        .bind(req.total_limit)
        .bind(req.available_limit)
        .bind(req.statement_date)
        .bind(req.due_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn update(
        &self,
        card_id: Uuid,
        user_id: Uuid,
        req: &UpdateCardRequest,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, CardModel>(
            r#"
            UPDATE cards
            SET
                bank_name = $3,
                card_name = $4,
                card_number = $5,
                holder_name = $6,
                total_limit = $7,
                available_limit = $8,
                statement_date = $9,
                due_date = $10,
                updated_at = CURRENT_TIMESTAMP
            WHERE
                card_id = $1
                AND user_id = $2
            RETURNING
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
            "#,
        )
        .bind(card_id)
        .bind(user_id)
        .bind(&req.bank_name)
        .bind(&req.card_name)
        .bind(&req.card_number)
        .bind(&req.holder_name)
        .bind(req.total_limit)
        .bind(req.available_limit)
        .bind(req.statement_date)
        .bind(req.due_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in update card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn delete(&self, card_id: Uuid, user_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM cards
            WHERE card_id = $1 AND user_id = $2
            "#,
        )
        .bind(card_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in delete card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
