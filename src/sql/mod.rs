//! Fixed, parameterized SQL for the posts table.

pub mod params;
pub mod statements;
pub use params::*;
pub use statements::*;
