use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub card_id: Uuid,
    pub user_id: Uuid,
    pub bank_name: String,
    pub card_name: String,
    pub card_number: String,
    pub holder_name: String,
    pub total_limit: i64,
    pub available_limit: i64,
    pub statement_date: NaiveDate,
    pub due_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// SUM over an empty set is NULL in Postgres, hence the options.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardTotalsModel {
    pub total_limit: Option<i64>,
    pub available_limit: Option<i64>,
    pub total_cards: Option<i64>,
}
