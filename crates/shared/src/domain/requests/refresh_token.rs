use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRefreshToken {
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: NaiveDateTime,
}
