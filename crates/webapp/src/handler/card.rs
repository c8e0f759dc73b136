use crate::{
    middleware::{jwt, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::card::service::{
        command::DynCardCommandService, dashboard::DynCardDashboardService,
        query::DynCardQueryService,
    },
    domain::{
        requests::card::{CreateCardRequest, UpdateCardRequest},
        responses::{ApiResponse, CardResponse, DashboardSummary},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/cards",
    tag = "Card",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cards of the current user, newest first", body = ApiResponse<Vec<CardResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_cards(
    Extension(service): Extension<DynCardQueryService>,
    Extension(user_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = "Card",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card details", body = ApiResponse<CardResponse>),
        (status = 403, description = "Card belongs to another user"),
        (status = 404, description = "Card not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_card(
    Extension(service): Extension<DynCardQueryService>,
    Extension(user_id): Extension<Uuid>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(user_id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/cards/create",
    tag = "Card",
    security(("bearer_auth" = [])),
    request_body = CreateCardRequest,
    responses(
        (status = 200, description = "Card created", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_card(
    Extension(service): Extension<DynCardCommandService>,
    Extension(user_id): Extension<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(user_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/cards/update/{id}",
    tag = "Card",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Card ID")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card updated", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Card belongs to another user"),
        (status = 404, description = "Card not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_card(
    Extension(service): Extension<DynCardCommandService>,
    Extension(user_id): Extension<Uuid>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(user_id, id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/cards/delete/{id}",
    tag = "Card",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card deleted"),
        (status = 404, description = "Card not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn delete_card(
    Extension(service): Extension<DynCardCommandService>,
    Extension(user_id): Extension<Uuid>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(user_id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/cards/dashboard",
    tag = "Card",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Aggregate totals over the user's cards", body = ApiResponse<DashboardSummary>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_card_dashboard(
    Extension(service): Extension<DynCardDashboardService>,
    Extension(user_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.summary(user_id).await?;
    Ok(Json(response))
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cards", get(get_cards))
        .route("/api/cards/create", post(create_card))
        .route("/api/cards/dashboard", get(get_card_dashboard))
        .route("/api/cards/{id}", get(get_card))
        .route("/api/cards/update/{id}", post(update_card))
        .route("/api/cards/delete/{id}", delete(delete_card))
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.card_query_service.clone()))
        .layer(Extension(app_state.di_container.card_command_service.clone()))
        .layer(Extension(
            app_state.di_container.card_dashboard_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
