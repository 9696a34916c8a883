//! HTTP handlers for posts.

pub mod posts;
