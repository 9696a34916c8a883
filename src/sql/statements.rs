//! The statements behind each post operation. Values always travel as parameters.
//!
//! Ids are bound as they arrive (path text or JSON number) and cast by the
//! server, so a non-numeric id fails inside the store rather than in the handler.

/// `$1` title, `$2` content.
pub const INSERT_POST: &str = "INSERT INTO posts (title, content, created_at, updated_at) \
     VALUES ($1, $2, NOW(), NOW()) \
     RETURNING id, title, content, created_at, updated_at";

pub const SELECT_POSTS: &str = "SELECT id, title, content, created_at, updated_at \
     FROM posts ORDER BY created_at DESC";

/// `$1` id.
pub const SELECT_POST_BY_ID: &str = "SELECT id, title, content, created_at, updated_at \
     FROM posts WHERE id = $1::bigint";

/// `$1` title, `$2` content, `$3` id.
pub const UPDATE_POST: &str = "UPDATE posts SET title = $1, content = $2, updated_at = NOW() \
     WHERE id = $3::bigint \
     RETURNING id, title, content, created_at, updated_at";

pub const PING: &str = "SELECT 1";
