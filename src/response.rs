//! Success envelope helpers: `{message, post}` and `{message, posts}`.

use crate::model::{Post, PostEnvelope, PostsEnvelope};
use axum::{http::StatusCode, Json};

pub const POST_CREATED: &str = "Post created";
pub const POSTS_RETRIEVED: &str = "Posts retrieved";
pub const POST_RETRIEVED: &str = "Post retrieved";
pub const POST_UPDATED: &str = "Post updated";

/// Create answers 200 as well, not 201.
pub fn success_post(message: &'static str, post: Post) -> (StatusCode, Json<PostEnvelope>) {
    (StatusCode::OK, Json(PostEnvelope { message, post }))
}

pub fn success_posts(message: &'static str, posts: Vec<Post>) -> (StatusCode, Json<PostsEnvelope>) {
    (StatusCode::OK, Json(PostsEnvelope { message, posts }))
}
