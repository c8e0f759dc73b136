use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, format_validation_errors};
use validator::Validate;

/// Json extractor that runs field validation before the handler sees
/// the payload; a rejected draft never reaches a service.
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppErrorHttp(ServiceError::Validation(vec![e.body_text()])))?;

        value.validate().map_err(|e| {
            let error_msg = format_validation_errors(&e);
            AppErrorHttp(ServiceError::Validation(
                error_msg.lines().map(ToString::to_string).collect(),
            ))
        })?;

        Ok(Self(value))
    }
}
