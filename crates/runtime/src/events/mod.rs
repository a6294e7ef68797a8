//! Event stream produced by a [`Session`](crate::Session).

mod extractor;
mod session_event;

pub(crate) use extractor::{TurnContext, extract_events};
pub use session_event::{HealthBand, SessionEvent};
