use crate::{
    abstract_trait::card::{
        repository::query::DynCardQueryRepository, service::query::CardQueryServiceTrait,
    },
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_all(
        &self,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<CardResponse>>, ServiceError> {
        info!("📋 Fetching cards for user_id={user_id}");

        let cards = self.query.find_all_by_user(user_id).await.map_err(|e| {
            error!("💥 Failed to fetch cards for user_id {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let responses: Vec<CardResponse> = cards.into_iter().map(CardResponse::from).collect();

        info!("✅ Retrieved {} cards for user_id={user_id}", responses.len());

        Ok(ApiResponse {
            status: "success".into(),
            message: "Cards retrieved successfully".into(),
            data: responses,
        })
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        card_id: Uuid,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        let card = self.query.find_by_id(card_id).await.map_err(|e| {
            error!("💥 Failed to fetch card {card_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if card.user_id != user_id {
            error!("🚫 User {user_id} attempted to view card {card_id} they do not own");
            return Err(ServiceError::PermissionDenied(
                "You are not allowed to view this card".into(),
            ));
        }

        Ok(ApiResponse {
            status: "success".into(),
            message: "Card retrieved successfully".into(),
            data: CardResponse::from(card),
        })
    }
}
