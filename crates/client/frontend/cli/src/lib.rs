//! Terminal front-end for the gem strip game.
//!
//! A thin consumer of the runtime: reads line commands, plays them on a
//! [`gem_runtime::Session`], and prints the resulting events as text or JSON.

mod app;
mod command;
mod config;
pub mod logging;
mod render;

pub use app::CliApp;
pub use command::{Command, CommandError, HELP};
pub use config::{CliConfig, OutputMode};
pub use render::{Renderer, move_label};
