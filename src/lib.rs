//! posts-api: a small REST service for posts stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError, ConnectError, PostOp, StoreError, ValidationError};
pub use model::Post;
pub use routes::{app, common_routes, post_routes};
pub use service::PostService;
pub use state::AppState;
pub use store::{connect, Gateway, PgGateway, Row};
