use crate::model::user::UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    #[serde(rename = "display_name")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

// model to response; the password hash never leaves the service layer
impl From<UserModel> for UserResponse {
    fn from(model: UserModel) -> Self {
        Self {
            user_id: model.user_id,
            display_name: model.display_name,
            email: model.email,
            created_at: model.created_at.to_string(),
        }
    }
}
