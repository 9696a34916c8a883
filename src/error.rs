//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("invalid database url: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Startup failure while building the connection pool.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("connect: {0}")]
    Db(#[from] sqlx::Error),
}

/// Failure raised by the data access gateway. Always surfaces to clients as a 500.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("row decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client-caused payload problems. The display string is what the client sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and content are required")]
    MissingFields,
    #[error("Post id is required")]
    MissingId,
    #[error("Invalid request body")]
    MalformedBody,
    #[error("Invalid post id")]
    MalformedId,
}

/// The post operation a storage failure happened in; selects the generic client message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostOp {
    Create,
    List,
    Get,
    Update,
}

impl PostOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            PostOp::Create => "Failed to create post",
            PostOp::List => "Failed to retrieve posts",
            PostOp::Get => "Failed to retrieve post",
            PostOp::Update => "Failed to update post",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Post not found")]
    NotFound,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("{}", .op.failure_message())]
    Storage {
        op: PostOp,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn storage(op: PostOp, source: StoreError) -> Self {
        AppError::Storage { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Storage { op, source } => {
                tracing::error!(op = ?op, error = %source, "storage failure");
            }
            AppError::Validation(e) => tracing::debug!(error = %e, "rejected request"),
            AppError::NotFound | AppError::PayloadTooLarge => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
