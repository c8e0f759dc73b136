use crate::utils::{deserialize_amount, deserialize_display_date};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    #[validate(length(min = 1, max = 100, message = "Bank name is required"))]
    pub bank_name: String,

    #[validate(length(min = 1, max = 100, message = "Card name is required"))]
    pub card_name: String,

    #[validate(length(min = 1, max = 16, message = "Card number must be 1-16 characters"))]
    pub card_number: String,

    #[validate(length(min = 1, max = 100, message = "Holder name is required"))]
    pub holder_name: String,

    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Total limit must be non-negative"))]
    pub total_limit: i64,

    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Available limit must be non-negative"))]
    pub available_limit: i64,

    #[serde(deserialize_with = "deserialize_display_date")]
    #[schema(value_type = String, example = "15.03.2025")]
    pub statement_date: NaiveDate,

    #[serde(deserialize_with = "deserialize_display_date")]
    #[schema(value_type = String, example = "25.03.2025")]
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, max = 100, message = "Bank name is required"))]
    pub bank_name: String,

    #[validate(length(min = 1, max = 100, message = "Card name is required"))]
    pub card_name: String,

    #[validate(length(min = 1, max = 16, message = "Card number must be 1-16 characters"))]
    pub card_number: String,

    #[validate(length(min = 1, max = 100, message = "Holder name is required"))]
    pub holder_name: String,

    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Total limit must be non-negative"))]
    pub total_limit: i64,

    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Available limit must be non-negative"))]
    pub available_limit: i64,

    #[serde(deserialize_with = "deserialize_display_date")]
    #[schema(value_type = String, example = "15.03.2025")]
    pub statement_date: NaiveDate,

    #[serde(deserialize_with = "deserialize_display_date")]
    #[schema(value_type = String, example = "25.03.2025")]
    pub due_date: NaiveDate,
}
