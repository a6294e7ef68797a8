//! Line commands typed by the player.

use gem_core::{PlayerMove, STRIP_LEN, Strip};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(PlayerMove),
    Restart,
    /// Print the current state again.
    Show,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` takes two slots, e.g. `{command} A C`")]
    MissingSlots { command: &'static str },

    #[error("`{0}` is not a slot (A-{last})", last = last_label())]
    InvalidSlot(String),

    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

pub const HELP: &str = "\
commands:
  swap <from> <to>   exchange two gems        (s A C)
  drag <from> <to>   carry a gem to a slot    (d A F)
  show               print the strip again
  restart            start over from the first enemy
  help               this text
  quit               leave";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "swap" | "s" => {
                let (a, b) = slots(&mut words, "swap")?;
                Self::Play(PlayerMove::Swap { a, b })
            }
            "drag" | "d" => {
                let (from, to) = slots(&mut words, "drag")?;
                Self::Play(PlayerMove::Drag { from, to })
            }
            "restart" | "r" => Self::Restart,
            "show" | "l" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(head.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn slots<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(usize, usize), CommandError> {
    match (words.next(), words.next()) {
        (Some(a), Some(b)) => Ok((slot(a)?, slot(b)?)),
        _ => Err(CommandError::MissingSlots { command }),
    }
}

fn slot(word: &str) -> Result<usize, CommandError> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Strip::slot_index(label)
            .ok_or_else(|| CommandError::InvalidSlot(word.to_owned())),
        _ => Err(CommandError::InvalidSlot(word.to_owned())),
    }
}

fn last_label() -> char {
    Strip::slot_label(STRIP_LEN - 1).unwrap_or('N')
}
