use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthRequest {
    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_requires_display_name() {
        let req = RegisterRequest {
            display_name: String::new(),
            email: "me@example.com".into(),
            password: "secret1".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        let req = RegisterRequest {
            display_name: "Jane Doe".into(),
            email: "me@example.com".into(),
            password: "12345".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn login_rejects_malformed_email() {
        let req = AuthRequest {
            email: "not-an-email".into(),
            password: "secret1".into(),
        };

        assert!(req.validate().is_err());
    }
}
