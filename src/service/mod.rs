//! PostService: post operations over the gateway, plus payload validation.

mod posts;
mod validation;
pub use posts::PostService;
pub use validation::RequestValidator;
