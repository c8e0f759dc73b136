use crate::{
    abstract_trait::refresh_token::command::RefreshTokenCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::refresh_token::CreateRefreshToken,
    errors::RepositoryError, model::refresh_token::RefreshTokenModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct RefreshTokenCommandRepository {
    db_pool: ConnectionPool,
}

impl RefreshTokenCommandRepository {
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
impl RefreshTokenCommandRepositoryTrait for RefreshTokenCommandRepository {
    async fn create(&self, req: &CreateRefreshToken) -> Result<RefreshTokenModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, RefreshTokenModel>(
            r#"
            INSERT INTO refresh_tokens (
                refresh_token_id,
                user_id,
                token,
                expires_at,
                created_at
            )
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP)
            RETURNING
                refresh_token_id,
                user_id,
                token,
                expires_at,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.user_id)
        .bind(&req.token)
        .bind(req.expires_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create refresh token: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in delete_by_user_id refresh token: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
