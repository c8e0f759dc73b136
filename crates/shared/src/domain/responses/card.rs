use crate::{
    model::card::{CardModel, CardTotalsModel},
    utils::format_display_date,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    #[serde(rename = "card_id")]
    pub card_id: Uuid,
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    #[serde(rename = "bank_name")]
    pub bank_name: String,
    #[serde(rename = "card_name")]
    pub card_name: String,
    #[serde(rename = "card_number")]
    pub card_number: String,
    #[serde(rename = "holder_name")]
    pub holder_name: String,
    #[serde(rename = "total_limit")]
    pub total_limit: i64,
    #[serde(rename = "available_limit")]
    pub available_limit: i64,
    #[serde(rename = "statement_date")]
    pub statement_date: String,
    #[serde(rename = "due_date")]
    pub due_date: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    #[serde(rename = "total_limit")]
    pub total_limit: i64,
    #[serde(rename = "available_limit")]
    pub available_limit: i64,
    #[serde(rename = "total_debt")]
    pub total_debt: i64,
    #[serde(rename = "total_cards")]
    pub total_cards: i64,
}

// model to response; calendar dates go out in display format
impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            card_id: model.card_id,
            user_id: model.user_id,
            bank_name: model.bank_name,
            card_name: model.card_name,
            card_number: model.card_number,
            holder_name: model.holder_name,
            total_limit: model.total_limit,
            available_limit: model.available_limit,
            statement_date: format_display_date(model.statement_date),
            due_date: format_display_date(model.due_date),
            created_at: model.created_at.to_string(),
            updated_at: model.updated_at.to_string(),
        }
    }
}

impl From<CardTotalsModel> for DashboardSummary {
    fn from(totals: CardTotalsModel) -> Self {
        let total_limit = totals.total_limit.unwrap_or(0);
        let available_limit = totals.available_limit.unwrap_or(0);

        Self {
            total_limit,
            available_limit,
            total_debt: total_limit - available_limit,
            total_cards: totals.total_cards.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample_model() -> CardModel {
        let created: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        CardModel {
            card_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            bank_name: "Akbank".into(),
            card_name: "Axess".into(),
            card_number: "4355081234567890".into(),
            holder_name: "Jane Doe".into(),
            total_limit: 10000,
            available_limit: 4000,
            statement_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn dates_are_rendered_in_display_format() {
        let response = CardResponse::from(sample_model());

        assert_eq!(response.statement_date, "05.03.2025");
        assert_eq!(response.due_date, "25.03.2025");
    }

    #[test]
    fn dashboard_derives_debt_from_sums() {
        let summary = DashboardSummary::from(CardTotalsModel {
            total_limit: Some(15000),
            available_limit: Some(5000),
            total_cards: Some(2),
        });

        assert_eq!(summary.total_limit, 15000);
        assert_eq!(summary.available_limit, 5000);
        assert_eq!(summary.total_debt, 10000);
        assert_eq!(summary.total_cards, 2);
    }

    #[test]
    fn empty_card_set_sums_to_zero() {
        let summary = DashboardSummary::from(CardTotalsModel {
            total_limit: None,
            available_limit: None,
            total_cards: Some(0),
        });

        assert_eq!(summary.total_limit, 0);
        assert_eq!(summary.available_limit, 0);
        assert_eq!(summary.total_debt, 0);
    }
}
