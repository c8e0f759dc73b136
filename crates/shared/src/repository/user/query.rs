use crate::{
    abstract_trait::user::repository::query::UserQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::user::UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserQueryRepository {
    db_pool: ConnectionPool,
}

impl UserQueryRepository {
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
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT
                user_id,
                display_name,
                email,
                password,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id user: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT
                user_id,
                display_name,
                email,
                password,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_email user: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }
}
