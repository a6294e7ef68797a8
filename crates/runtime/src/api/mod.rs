//! Public API surface shared with front-ends.
mod errors;

pub use errors::{Result, RuntimeError};
