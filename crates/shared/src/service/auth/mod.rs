use crate::{
    abstract_trait::{
        auth::AuthServiceTrait,
        jwt::DynJwtService,
        refresh_token::{
            command::DynRefreshTokenCommandRepository, query::DynRefreshTokenQueryRepository,
        },
        token::DynTokenService,
        user::repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
    },
    domain::{
        requests::{
            auth::{AuthRequest, RegisterRequest},
            user::CreateUserRequest,
        },
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct AuthService {
    user_query: DynUserQueryRepository,
    user_command: DynUserCommandRepository,
    refresh_query: DynRefreshTokenQueryRepository,
    refresh_command: DynRefreshTokenCommandRepository,
    jwt: DynJwtService,
    token: DynTokenService,
}

impl AuthService {
    pub fn new(
        user_query: DynUserQueryRepository,
        user_command: DynUserCommandRepository,
        refresh_query: DynRefreshTokenQueryRepository,
        refresh_command: DynRefreshTokenCommandRepository,
        jwt: DynJwtService,
        token: DynTokenService,
    ) -> Self {
        Self {
            user_query,
            user_command,
            refresh_query,
            refresh_command,
            jwt,
            token,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        input: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if let Err(validation_errors) = input.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(ToString::to_string).collect(),
            ));
        }

        info!("🆕 Registering user with email {}", input.email);

        match self.user_query.find_by_email(&input.email).await {
            Ok(_) => {
                error!("📧 Email {} is already registered", input.email);
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                    "Email is already registered".into(),
                )));
            }
            Err(RepositoryError::NotFound) => {}
            Err(e) => {
                error!("💥 Failed to check email {}: {e:?}", input.email);
                return Err(ServiceError::Repo(e));
            }
        }

        let hashed = hash(&input.password, DEFAULT_COST)?;

        let req = CreateUserRequest {
            display_name: input.display_name.clone(),
            email: input.email.clone(),
            password: hashed,
        };

        let user = self.user_command.create(&req).await.map_err(|e| {
            error!("💥 Failed to create user: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ User registered successfully with user_id={}", user.user_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ User registered successfully!".into(),
            data: UserResponse::from(user),
        })
    }

    async fn login_user(
        &self,
        input: &AuthRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        if let Err(validation_errors) = input.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(ToString::to_string).collect(),
            ));
        }

        // unknown user and wrong password collapse into one outcome
        let user = self
            .user_query
            .find_by_email(&input.email)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        if !verify(&input.password, &user.password)? {
            return Err(ServiceError::InvalidCredentials);
        }

        let access_token = self.token.create_access_token(user.user_id).await?;
        let refresh_token = self.token.create_refresh_token(user.user_id).await?;

        info!("✅ User login success for user_id={}", user.user_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Login successful".into(),
            data: TokenResponse {
                access_token,
                refresh_token,
            },
        })
    }

    async fn get_me(&self, user_id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.user_query.find_by_id(user_id).await.map_err(|e| {
            error!("👤 Failed to find user with id {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "User retrieved successfully".into(),
            data: UserResponse::from(user),
        })
    }

    async fn refresh_token(
        &self,
        token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = self.jwt.verify_token(token, "refresh")?;

        let stored = self
            .refresh_query
            .find_by_token(token)
            .await
            .map_err(|_| ServiceError::InvalidTokenType)?;

        if stored.user_id != user_id {
            return Err(ServiceError::InvalidTokenType);
        }

        if stored.expires_at < Utc::now().naive_utc() {
            return Err(ServiceError::TokenExpired);
        }

        let access_token = self.token.create_access_token(user_id).await?;
        let refresh_token = self.token.create_refresh_token(user_id).await?;

        info!("✅ Refreshed tokens for user_id={user_id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Token refreshed successfully".into(),
            data: TokenResponse {
                access_token,
                refresh_token,
            },
        })
    }

    async fn logout(&self, user_id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        self.refresh_command
            .delete_by_user_id(user_id)
            .await
            .map_err(|e| {
                error!("💥 Failed to delete refresh token for user_id {user_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("👋 User {user_id} logged out");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Logged out successfully".into(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            refresh_token::{
                command::RefreshTokenCommandRepositoryTrait,
                query::RefreshTokenQueryRepositoryTrait,
            },
            user::repository::{
                command::UserCommandRepositoryTrait, query::UserQueryRepositoryTrait,
            },
        },
        config::JwtConfig,
        domain::requests::refresh_token::CreateRefreshToken,
        model::{refresh_token::RefreshTokenModel, user::UserModel},
        service::token::TokenService,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<UserModel>>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for MockUserRepository {
        async fn find_by_id(&self, user_id: Uuid) -> Result<UserModel, RepositoryError> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == user_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_by_email(&self, email: &str) -> Result<UserModel, RepositoryError> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    #[async_trait]
    impl UserCommandRepositoryTrait for MockUserRepository {
        async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
            let now = Utc::now().naive_utc();
            let user = UserModel {
                user_id: Uuid::new_v4(),
                display_name: req.display_name.clone(),
                email: req.email.clone(),
                password: req.password.clone(),
                created_at: now,
                updated_at: now,
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }
    }

    #[derive(Default)]
    struct MockRefreshTokenRepository {
        rows: Mutex<Vec<RefreshTokenModel>>,
    }

    #[async_trait]
    impl RefreshTokenCommandRepositoryTrait for MockRefreshTokenRepository {
        async fn create(
            &self,
            req: &CreateRefreshToken,
        ) -> Result<RefreshTokenModel, RepositoryError> {
            let row = RefreshTokenModel {
                refresh_token_id: Uuid::new_v4(),
                user_id: req.user_id,
                token: req.token.clone(),
                expires_at: req.expires_at,
                created_at: Utc::now().naive_utc(),
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.user_id != user_id);
            Ok(rows.len() < before)
        }
    }

    #[async_trait]
    impl RefreshTokenQueryRepositoryTrait for MockRefreshTokenRepository {
        async fn find_by_token(&self, token: &str) -> Result<RefreshTokenModel, RepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.token == token)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    fn build_service() -> AuthService {
        let users = Arc::new(MockUserRepository::default());
        let refresh = Arc::new(MockRefreshTokenRepository::default());
        let jwt: DynJwtService = Arc::new(JwtConfig::new("test-secret"));
        let token = Arc::new(TokenService::new(jwt.clone(), refresh.clone()));

        AuthService::new(
            users.clone(),
            users,
            refresh.clone(),
            refresh,
            jwt,
            token,
        )
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            display_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn register_then_login_roundtrip() {
        let service = build_service();

        let registered = service.register_user(&register_request()).await.unwrap();
        assert_eq!(registered.data.email, "jane@example.com");

        let tokens = service
            .login_user(&AuthRequest {
                email: "jane@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        assert!(!tokens.data.access_token.is_empty());
        assert!(!tokens.data.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let service = build_service();

        service.register_user(&register_request()).await.unwrap();
        let err = service.register_user(&register_request()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let service = build_service();
        service.register_user(&register_request()).await.unwrap();

        let wrong_password = service
            .login_user(&AuthRequest {
                email: "jane@example.com".into(),
                password: "not-the-password".into(),
            })
            .await
            .unwrap_err();

        let unknown_user = service
            .login_user(&AuthRequest {
                email: "nobody@example.com".into(),
                password: "whatever1".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ServiceError::InvalidCredentials));
        assert!(matches!(unknown_user, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn refresh_rejects_access_token() {
        let service = build_service();
        service.register_user(&register_request()).await.unwrap();

        let tokens = service
            .login_user(&AuthRequest {
                email: "jane@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        let err = service
            .refresh_token(&tokens.data.access_token)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTokenType));
    }

    #[tokio::test]
    async fn logout_tears_down_refresh_session() {
        let service = build_service();
        let registered = service.register_user(&register_request()).await.unwrap();

        let tokens = service
            .login_user(&AuthRequest {
                email: "jane@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        service.logout(registered.data.user_id).await.unwrap();

        let err = service
            .refresh_token(&tokens.data.refresh_token)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTokenType));
    }
}
