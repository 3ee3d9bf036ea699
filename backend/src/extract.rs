//! Request body extractor for JSON payloads.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, HeaderValue},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Like [`Json`], but a body sent without a `Content-Type` is read as JSON,
/// and every rejection turns into a 422 [`ApiError`].
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            req.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
