use serde::Deserialize;
use validator::Validate;

/// Repository-side create request; `password` is already hashed by the
/// auth service before it reaches the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password hash is required"))]
    pub password: String,
}
