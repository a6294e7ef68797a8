//! Session orchestration for the gem strip game.
//!
//! This crate wraps the pure rules of `gem-core` into a stateful [`Session`]
//! that owns the random stream, records accepted moves for replay, emits a
//! flat [`SessionEvent`] stream per turn, and instruments everything with
//! `tracing`.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] turns engine reports into consumer-facing events
pub mod api;
pub mod events;
pub mod session;

pub use api::{Result, RuntimeError};
pub use events::{HealthBand, SessionEvent};
pub use session::{Session, SessionBuilder};
