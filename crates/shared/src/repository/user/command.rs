use crate::{
    abstract_trait::user::repository::command::UserCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::user::CreateUserRequest, errors::RepositoryError,
    model::user::UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserCommandRepository {
    db_pool: ConnectionPool,
}

impl UserCommandRepository {
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
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (
                user_id,
                display_name,
                email,
                password,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING
                user_id,
                display_name,
                email,
                password,
                created_at,
                updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.display_name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create user: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }
}
