//! JSON body extractor with the API's error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::AppError;

/// Like [`axum::Json`], but a malformed or mistyped body is rejected with
/// the standard `{ "error", "code" }` 400 response instead of axum's
/// plain-text rejection.
///
/// ```ignore
/// async fn create(ApiJson(input): ApiJson<CreateTaskRequest>) -> AppResult<Json<Task>> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
