//! Post handlers: create, list, read, update.
//!
//! Each handler validates before touching storage and converts storage failures
//! into the operation's generic 500 at its own boundary.

use crate::error::{AppError, PostOp};
use crate::extractors::{PathId, Payload};
use crate::model::{IdQuery, PostKey, PostPayload};
use crate::response::{success_post, success_posts, POSTS_RETRIEVED, POST_CREATED, POST_RETRIEVED, POST_UPDATED};
use crate::service::{PostService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

/// POST /: body `{title, content}`.
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<PostPayload>,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::post_input(&body)?;
    let post = PostService::create(state.gateway.as_ref(), &input)
        .await
        .map_err(|e| AppError::storage(PostOp::Create, e))?;
    tracing::info!(id = post.id, "post created");
    Ok(success_post(POST_CREATED, post))
}

/// GET /: every post, newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::list(state.gateway.as_ref())
        .await
        .map_err(|e| AppError::storage(PostOp::List, e))?;
    Ok(success_posts(POSTS_RETRIEVED, posts))
}

/// GET /:id
pub async fn read(
    State(state): State<AppState>,
    id: PathId,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::get(state.gateway.as_ref(), PostKey::from(id))
        .await
        .map_err(|e| AppError::storage(PostOp::Get, e))?
        .ok_or(AppError::NotFound)?;
    Ok(success_post(POST_RETRIEVED, post))
}

/// PATCH /:id: body `{title, content}`.
pub async fn update_by_path(
    State(state): State<AppState>,
    PathId(id): PathId,
    Payload(body): Payload<PostPayload>,
) -> Result<impl IntoResponse, AppError> {
    update_post(&state, Some(id), None, body).await
}

/// PATCH /: id from `?id=` or the body's `id` field.
pub async fn update(
    State(state): State<AppState>,
    query: Option<Query<IdQuery>>,
    Payload(body): Payload<PostPayload>,
) -> Result<impl IntoResponse, AppError> {
    let query_id = query.and_then(|Query(q)| q.id);
    update_post(&state, None, query_id, body).await
}

async fn update_post(
    state: &AppState,
    path_id: Option<String>,
    query_id: Option<String>,
    mut body: PostPayload,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::post_input(&body)?;
    let id = RequestValidator::post_key(path_id, query_id, body.id.take())?;
    let post = PostService::update(state.gateway.as_ref(), id, &input)
        .await
        .map_err(|e| AppError::storage(PostOp::Update, e))?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id = post.id, "post updated");
    Ok(success_post(POST_UPDATED, post))
}
