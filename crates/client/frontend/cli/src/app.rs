//! Read-eval-print loop over a [`Session`].

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use gem_runtime::Session;

use crate::command::{Command, HELP};
use crate::render::Renderer;

pub struct CliApp {
    session: Session,
    renderer: Renderer,
}

impl CliApp {
    pub fn new(session: Session, renderer: Renderer) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs commands from `input` until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.renderer.status(&mut output, &self.session)?;
        self.renderer.prompt(&mut output)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.renderer.prompt(&mut output)?;
                output.flush()?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(error) => self.renderer.notice(&mut output, &error.to_string())?,
            }
            self.renderer.prompt(&mut output)?;
            output.flush()?;
        }

        info!(
            seed = self.session.seed(),
            restarts = self.session.restarts(),
            moves = self.session.moves().len(),
            moves_root = %hex::encode(self.session.moves_root()),
            "Leaving session"
        );
        Ok(())
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> Result<()> {
        match command {
            Command::Play(player_move) => match self.session.play(player_move) {
                Ok(events) => {
                    for event in &events {
                        self.renderer.event(output, &self.session, event)?;
                    }
                    self.renderer.status(output, &self.session)?;
                }
                Err(error) => self.renderer.notice(output, &error.to_string())?,
            },
            Command::Restart => {
                let event = self.session.restart();
                self.renderer.event(output, &self.session, &event)?;
                self.renderer.status(output, &self.session)?;
            }
            Command::Show => self.renderer.status(output, &self.session)?,
            Command::Help => self.renderer.notice(output, HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }
}
