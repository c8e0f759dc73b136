use shared::{
    abstract_trait::{
        auth::DynAuthService,
        card::{
            repository::{
                command::DynCardCommandRepository, dashboard::DynCardDashboardRepository,
                query::DynCardQueryRepository,
            },
            service::{
                command::DynCardCommandService, dashboard::DynCardDashboardService,
                query::DynCardQueryService,
            },
        },
        jwt::DynJwtService,
        refresh_token::{
            command::DynRefreshTokenCommandRepository, query::DynRefreshTokenQueryRepository,
        },
        token::DynTokenService,
        user::repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
    },
    config::ConnectionPool,
    repository::{
        card::{CardCommandRepository, CardDashboardRepository, CardQueryRepository},
        refresh_token::{RefreshTokenCommandRepository, RefreshTokenQueryRepository},
        user::{UserCommandRepository, UserQueryRepository},
    },
    service::{
        auth::AuthService,
        card::{CardCommandService, CardDashboardService, CardQueryService},
        token::TokenService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub card_query_service: DynCardQueryService,
    pub card_command_service: DynCardCommandService,
    pub card_dashboard_service: DynCardDashboardService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("card_query_service", &"CardQueryService")
            .field("card_command_service", &"CardCommandService")
            .field("card_dashboard_service", &"CardDashboardService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let user_query =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let user_command =
            Arc::new(UserCommandRepository::new(pool.clone())) as DynUserCommandRepository;
        let refresh_query = Arc::new(RefreshTokenQueryRepository::new(pool.clone()))
            as DynRefreshTokenQueryRepository;
        let refresh_command = Arc::new(RefreshTokenCommandRepository::new(pool.clone()))
            as DynRefreshTokenCommandRepository;

        let card_query_repo =
            Arc::new(CardQueryRepository::new(pool.clone())) as DynCardQueryRepository;
        let card_command_repo =
            Arc::new(CardCommandRepository::new(pool.clone())) as DynCardCommandRepository;
        let card_dashboard_repo =
            Arc::new(CardDashboardRepository::new(pool)) as DynCardDashboardRepository;

        let token_service =
            Arc::new(TokenService::new(jwt.clone(), refresh_command.clone())) as DynTokenService;

        let auth_service = Arc::new(AuthService::new(
            user_query,
            user_command,
            refresh_query,
            refresh_command,
            jwt,
            token_service,
        )) as DynAuthService;

        let card_query_service =
            Arc::new(CardQueryService::new(card_query_repo.clone())) as DynCardQueryService;
        let card_command_service =
            Arc::new(CardCommandService::new(card_query_repo, card_command_repo))
                as DynCardCommandService;
        let card_dashboard_service =
            Arc::new(CardDashboardService::new(card_dashboard_repo)) as DynCardDashboardService;

        Self {
            auth_service,
            card_query_service,
            card_command_service,
            card_dashboard_service,
        }
    }
}
