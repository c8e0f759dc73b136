use axum::{
    Extension,
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use shared::{
    abstract_trait::jwt::DynJwtService,
    errors::{AppErrorHttp, ServiceError},
};

/// Resolves the request's session: a verified access token attaches the
/// owner id as a request extension, anything else is a 401 before any
/// data operation runs.
pub async fn auth(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppErrorHttp> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppErrorHttp(ServiceError::InvalidTokenType))?;

    let user_id = jwt
        .verify_token(token, "access")
        .map_err(AppErrorHttp)?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
