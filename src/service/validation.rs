//! Payload validation for create and update.

use crate::error::ValidationError;
use crate::model::{PostInput, PostKey, PostPayload};

pub struct RequestValidator;

impl RequestValidator {
    /// Title and content must both be present and non-empty.
    pub fn post_input(payload: &PostPayload) -> Result<PostInput, ValidationError> {
        match (non_empty(&payload.title), non_empty(&payload.content)) {
            (Some(title), Some(content)) => Ok(PostInput {
                title: title.to_string(),
                content: content.to_string(),
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }

    /// First id found among path, query, and body, in that order.
    pub fn post_key(
        path: Option<String>,
        query: Option<String>,
        body: Option<PostKey>,
    ) -> Result<PostKey, ValidationError> {
        path.filter(|s| !s.is_empty())
            .or_else(|| query.filter(|s| !s.is_empty()))
            .map(PostKey::Text)
            .or_else(|| body.filter(|k| !matches!(k, PostKey::Text(s) if s.is_empty())))
            .ok_or(ValidationError::MissingId)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
