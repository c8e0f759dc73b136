use crate::{
    abstract_trait::refresh_token::query::RefreshTokenQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::refresh_token::RefreshTokenModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct RefreshTokenQueryRepository {
    db_pool: ConnectionPool,
}

impl RefreshTokenQueryRepository {
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
impl RefreshTokenQueryRepositoryTrait for RefreshTokenQueryRepository {
    async fn find_by_token(&self, token: &str) -> Result<RefreshTokenModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, RefreshTokenModel>(
            r#"
            SELECT
                refresh_token_id,
                user_id,
                token,
                expires_at,
                created_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_token refresh token: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }
}
