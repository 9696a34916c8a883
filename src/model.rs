//! Post record plus the request and response shapes of the API.

use crate::error::StoreError;
use crate::sql::SqlParam;
use crate::store::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Decode a gateway row; a row missing a column or carrying the wrong type is a storage failure.
    pub fn from_row(row: Row) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(serde_json::Value::Object(row))?)
    }
}

/// Post identifier as received from a client: path or query text, or a JSON number in the body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PostKey {
    Int(i64),
    Text(String),
}

impl From<PostKey> for SqlParam {
    fn from(key: PostKey) -> Self {
        match key {
            PostKey::Int(n) => SqlParam::Int(n),
            PostKey::Text(s) => SqlParam::Text(s),
        }
    }
}

/// Body of create and update. Fields are optional so absence is reported as a validation error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Only read by `PATCH /` when neither path nor query carries an id.
    #[serde(default)]
    pub id: Option<PostKey>,
}

/// `?id=` on `PATCH /`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Validated title and content, ready to bind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub message: &'static str,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostsEnvelope {
    pub message: &'static str,
    pub posts: Vec<Post>,
}
