use crate::{
    abstract_trait::card::{
        repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
        service::command::CardCommandServiceTrait,
    },
    domain::{
        requests::card::{CreateCardRequest, UpdateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
}

impl CardCommandService {
    pub fn new(query: DynCardQueryRepository, command: DynCardCommandRepository) -> Self {
        Self { query, command }
    }
}

/// Cross-field rule the derive cannot express: you cannot have more
/// available than the card's total limit.
fn check_limits(total_limit: i64, available_limit: i64) -> Result<(), ServiceError> {
    if available_limit > total_limit {
        return Err(ServiceError::Validation(vec![
            "available_limit: cannot exceed total_limit".into(),
        ]));
    }
    Ok(())
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(ToString::to_string).collect(),
            ));
        }

        check_limits(req.total_limit, req.available_limit)?;

        info!("🆕 Creating card for user_id={user_id}");

        let card = self.command.create(user_id, req).await.map_err(|e| {
            error!("💥 Failed to create card for user_id {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let response = CardResponse::from(card);

        info!("✅ Card created successfully with card_id={}", response.card_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card created successfully!".into(),
            data: response,
        })
    }

    async fn update(
        &self,
        user_id: Uuid,
        card_id: Uuid,
        req: &UpdateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(ToString::to_string).collect(),
            ));
        }

        check_limits(req.total_limit, req.available_limit)?;

        info!("🔄 Updating card id={card_id} for user_id={user_id}");

        // re-fetch and confirm ownership before any write is issued
        let existing = self.query.find_by_id(card_id).await.map_err(|e| {
            error!("💥 Failed to fetch card {card_id} during update: {e:?}");
            ServiceError::Repo(e)
        })?;

        if existing.user_id != user_id {
            error!("🚫 User {user_id} attempted to edit card {card_id} they do not own");
            return Err(ServiceError::PermissionDenied(
                "You are not allowed to edit this card".into(),
            ));
        }

        let updated = self
            .command
            .update(card_id, user_id, req)
            .await
            .map_err(|e| {
                error!("💥 Failed to update card id {card_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let response = CardResponse::from(updated);

        info!("✅ Card updated successfully with card_id={}", response.card_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card updated successfully!".into(),
            data: response,
        })
    }

    async fn delete(
        &self,
        user_id: Uuid,
        card_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting card id={card_id} for user_id={user_id}");

        let deleted = self.command.delete(card_id, user_id).await.map_err(|e| {
            error!("💥 Failed to delete card id {card_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !deleted {
            error!("🗑️ Card {card_id} not found for user_id {user_id}");
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        info!("✅ Card deleted successfully with card_id={card_id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "🗑️ Card deleted successfully!".into(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::card::repository::{
            command::CardCommandRepositoryTrait, query::CardQueryRepositoryTrait,
        },
        model::card::CardModel,
    };
    use chrono::{NaiveDate, Utc};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct MockCardQueryRepository {
        cards: Vec<CardModel>,
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for MockCardQueryRepository {
        async fn find_all_by_user(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, card_id: Uuid) -> Result<CardModel, RepositoryError> {
            self.cards
                .iter()
                .find(|c| c.card_id == card_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    #[derive(Default)]
    struct MockCardCommandRepository {
        writes: AtomicUsize,
        delete_hits: bool,
    }

    impl MockCardCommandRepository {
        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn model_from_create(user_id: Uuid, req: &CreateCardRequest) -> CardModel {
            let now = Utc::now().naive_utc();
            CardModel {
                card_id: Uuid::new_v4(),
                user_id,
                bank_name: req.bank_name.clone(),
                card_name: req.card_name.clone(),
                card_number: req.card_number.clone(),
                holder_name: req.holder_name.clone(),
                total_limit: req.total_limit,
                available_limit: req.available_limit,
                statement_date: req.statement_date,
                due_date: req.due_date,
                created_at: now,
                updated_at: now,
            }
        }
    }

    #[async_trait]
    impl CardCommandRepositoryTrait for MockCardCommandRepository {
        async fn create(
            &self,
            user_id: Uuid,
            req: &CreateCardRequest,
        ) -> Result<CardModel, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(Self::model_from_create(user_id, req))
        }

        async fn update(
            &self,
            card_id: Uuid,
            user_id: Uuid,
            req: &UpdateCardRequest,
        ) -> Result<CardModel, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let now = Utc::now().naive_utc();
            Ok(CardModel {
                card_id,
                user_id,
                bank_name: req.bank_name.clone(),
                card_name: req.card_name.clone(),
                card_number: req.card_number.clone(),
                holder_name: req.holder_name.clone(),
                total_limit: req.total_limit,
                available_limit: req.available_limit,
                statement_date: req.statement_date,
                due_date: req.due_date,
                created_at: now - chrono::Duration::hours(1),
                updated_at: now,
            })
        }

        async fn delete(&self, _card_id: Uuid, _user_id: Uuid) -> Result<bool, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.delete_hits)
        }
    }

    fn valid_create() -> CreateCardRequest {
        CreateCardRequest {
            bank_name: "Garanti BBVA".into(),
            card_name: "Bonus Platinum".into(),
            card_number: "5412751234561234".into(),
            holder_name: "Jane Doe".into(),
            total_limit: 10000,
            available_limit: 4000,
            statement_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
        }
    }

    fn valid_update() -> UpdateCardRequest {
        UpdateCardRequest {
            bank_name: "Garanti BBVA".into(),
            card_name: "Bonus Platinum".into(),
            card_number: "5412751234561234".into(),
            holder_name: "Jane Doe".into(),
            total_limit: 12000,
            available_limit: 6000,
            statement_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
        }
    }

    fn card_owned_by(user_id: Uuid) -> CardModel {
        MockCardCommandRepository::model_from_create(user_id, &valid_create())
    }

    #[tokio::test]
    async fn create_returns_card_with_equal_timestamps() {
        let command = Arc::new(MockCardCommandRepository {
            delete_hits: true,
            ..Default::default()
        });
        let service = CardCommandService::new(
            Arc::new(MockCardQueryRepository { cards: vec![] }),
            command,
        );

        let owner = Uuid::new_v4();
        let response = service.create(owner, &valid_create()).await.unwrap();

        assert_eq!(response.data.user_id, owner);
        assert!(!response.data.card_id.is_nil());
        assert_eq!(response.data.created_at, response.data.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_available_above_total_before_write() {
        let command = Arc::new(MockCardCommandRepository::default());
        let service = CardCommandService::new(
            Arc::new(MockCardQueryRepository { cards: vec![] }),
            command.clone(),
        );

        let mut req = valid_create();
        req.available_limit = req.total_limit + 1;

        let err = service.create(Uuid::new_v4(), &req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(command.write_count(), 0);
    }

    #[tokio::test]
    async fn update_by_non_owner_rejected_before_any_write() {
        let owner = Uuid::new_v4();
        let card = card_owned_by(owner);
        let card_id = card.card_id;

        let command = Arc::new(MockCardCommandRepository::default());
        let service = CardCommandService::new(
            Arc::new(MockCardQueryRepository { cards: vec![card] }),
            command.clone(),
        );

        let err = service
            .update(Uuid::new_v4(), card_id, &valid_update())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::PermissionDenied(_)));
        assert_eq!(command.write_count(), 0);
    }

    #[tokio::test]
    async fn update_by_owner_advances_updated_at() {
        let owner = Uuid::new_v4();
        let card = card_owned_by(owner);
        let card_id = card.card_id;

        let command = Arc::new(MockCardCommandRepository::default());
        let service = CardCommandService::new(
            Arc::new(MockCardQueryRepository { cards: vec![card] }),
            command,
        );

        let response = service
            .update(owner, card_id, &valid_update())
            .await
            .unwrap();

        assert_eq!(response.data.total_limit, 12000);
        assert!(response.data.updated_at > response.data.created_at);
    }

    #[tokio::test]
    async fn delete_of_missing_card_is_not_found_not_a_crash() {
        let command = Arc::new(MockCardCommandRepository {
            delete_hits: false,
            ..Default::default()
        });
        let service = CardCommandService::new(
            Arc::new(MockCardQueryRepository { cards: vec![] }),
            command,
        );

        let err = service
            .delete(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
