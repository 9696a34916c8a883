//! `:id` path segment extractor whose rejection uses the API error envelope.

use crate::error::{AppError, ValidationError};
use crate::model::PostKey;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The raw `:id` segment. Whether it is numeric is left to the store.
#[derive(Clone, Debug)]
pub struct PathId(pub String);

impl From<PathId> for PostKey {
    fn from(PathId(id): PathId) -> Self {
        PostKey::Text(id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(PathId(id)),
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable id segment");
                Err(ValidationError::MalformedId.into())
            }
        }
    }
}
