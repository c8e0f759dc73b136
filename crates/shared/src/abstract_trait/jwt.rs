use crate::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    fn generate_token(&self, user_id: Uuid, token_type: &str) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Uuid, ServiceError>;
}
