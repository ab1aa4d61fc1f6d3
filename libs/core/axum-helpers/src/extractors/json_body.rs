//! JSON body extractor that reports rejections in the standard error shape.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but converts deserialization failures
/// (malformed JSON, wrong content type, unexpected field types) into a
/// 400 with the standard `{error}` response body instead of axum's
/// plain-text rejection and its 415/422 statuses.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateTask {
///     title: Option<String>,
/// }
///
/// async fn create_task(JsonBody(payload): JsonBody<CreateTask>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        Ok(JsonBody(data))
    }
}
