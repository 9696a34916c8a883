//! In-memory gateway for tests. Understands exactly the statements in `crate::sql`.

use super::{Gateway, Row};
use crate::error::StoreError;
use crate::sql::{SqlParam, INSERT_POST, PING, SELECT_POSTS, SELECT_POST_BY_ID, UPDATE_POST};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

struct StoredPost {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredPost {
    fn to_row(&self) -> Row {
        match json!({
            "id": self.id,
            "title": self.title,
            "content": self.content,
            "created_at": self.created_at.to_rfc3339(),
            "updated_at": self.updated_at.to_rfc3339(),
        }) {
            serde_json::Value::Object(m) => m,
            _ => unreachable!(),
        }
    }
}

#[derive(Default)]
pub struct MemoryGateway {
    posts: Mutex<Vec<StoredPost>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements executed so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// While set, every statement fails the way a lost connection does.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

fn text(p: &SqlParam) -> String {
    match p {
        SqlParam::Text(s) => s.clone(),
        SqlParam::Int(n) => n.to_string(),
    }
}

/// Mirrors `$n::bigint` on the server: text that is not an integer is a query error.
fn bigint(p: &SqlParam) -> Result<i64, StoreError> {
    match p {
        SqlParam::Int(n) => Ok(*n),
        SqlParam::Text(s) => s.trim().parse().map_err(|_| {
            StoreError::Db(sqlx::Error::Protocol(format!(
                "invalid input syntax for type bigint: \"{}\"",
                s
            )))
        }),
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Db(sqlx::Error::PoolTimedOut));
        }
        let mut posts = self.posts.lock().unwrap();
        match sql {
            INSERT_POST => {
                let now = Utc::now();
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
                let post = StoredPost {
                    id,
                    title: text(&params[0]),
                    content: text(&params[1]),
                    created_at: now,
                    updated_at: now,
                };
                let row = post.to_row();
                posts.push(post);
                Ok(vec![row])
            }
            SELECT_POSTS => {
                let mut sorted: Vec<&StoredPost> = posts.iter().collect();
                sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
                Ok(sorted.into_iter().map(StoredPost::to_row).collect())
            }
            SELECT_POST_BY_ID => {
                let id = bigint(&params[0])?;
                Ok(posts.iter().filter(|p| p.id == id).map(StoredPost::to_row).collect())
            }
            UPDATE_POST => {
                let id = bigint(&params[2])?;
                Ok(posts
                    .iter_mut()
                    .filter(|p| p.id == id)
                    .map(|p| {
                        p.title = text(&params[0]);
                        p.content = text(&params[1]);
                        p.updated_at = Utc::now();
                        p.to_row()
                    })
                    .collect())
            }
            PING => Ok(vec![match json!({ "?column?": 1 }) {
                serde_json::Value::Object(m) => m,
                _ => unreachable!(),
            }]),
            other => Err(StoreError::Db(sqlx::Error::Protocol(format!(
                "unexpected statement: {}",
                other
            )))),
        }
    }
}
