mod path_id;
mod payload;
pub use path_id::PathId;
pub use payload::Payload;
