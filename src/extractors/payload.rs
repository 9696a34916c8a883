//! JSON body extractor whose rejection uses the API error envelope.

use crate::error::{AppError, ValidationError};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a missing, malformed, mistyped, or oversized body becomes an `{error}` response.
#[derive(Clone, Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::debug!(%rejection, "request body over limit");
                Err(AppError::PayloadTooLarge)
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable request body");
                Err(ValidationError::MalformedBody.into())
            }
        }
    }
}
