//! Writes session events and status to the terminal.
//!
//! Text mode prints one line per event plus the strip after every change.
//! JSON mode prints one object per line, using the events' own serde shape.

use std::io::Write;

use anyhow::Result;
use serde_json::json;

use gem_core::{Effect, ElementTable, PlayerMove, Strip, Token};
use gem_runtime::{HealthBand, Session, SessionEvent};

use crate::config::OutputMode;

pub struct Renderer {
    mode: OutputMode,
    color: bool,
}

impl Renderer {
    pub fn new(mode: OutputMode, color: bool) -> Self {
        Self { mode, color }
    }

    pub fn prompt(&self, out: &mut impl Write) -> Result<()> {
        if self.mode == OutputMode::Text {
            write!(out, "> ")?;
        }
        Ok(())
    }

    pub fn event(
        &self,
        out: &mut impl Write,
        session: &Session,
        event: &SessionEvent,
    ) -> Result<()> {
        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, event)?;
                writeln!(out)?;
            }
            OutputMode::Text => self.event_text(out, session, event)?,
        }
        Ok(())
    }

    /// Party, enemy and strip as they stand now.
    pub fn status(&self, out: &mut impl Write, session: &Session) -> Result<()> {
        let state = session.state();
        let party = state.party();
        let enemy = state.enemy();
        match self.mode {
            OutputMode::Json => {
                let status = json!({
                    "event": "status",
                    "turn": state.turn(),
                    "phase": state.phase().to_string(),
                    "encounter": state.encounter_index(),
                    "encounters": state.encounters().len(),
                    "party": {
                        "name": party.name(),
                        "hp": party.hp(),
                        "max_hp": party.max_hp(),
                        "band": HealthBand::from_hp(party.hp(), party.max_hp()),
                    },
                    "enemy": {
                        "name": enemy.name(),
                        "element": enemy.element(),
                        "hp": enemy.hp(),
                        "max_hp": enemy.max_hp(),
                        "band": HealthBand::from_hp(enemy.hp(), enemy.max_hp()),
                    },
                    "strip": state.strip().to_string(),
                });
                serde_json::to_writer(&mut *out, &status)?;
                writeln!(out)?;
            }
            OutputMode::Text => {
                let encounter = (state.encounter_index() + 1).min(state.encounters().len());
                writeln!(
                    out,
                    "{} {}/{} [{}]  vs  {} ({}) {}/{} [{}]  encounter {}/{}",
                    party.name(),
                    party.hp(),
                    party.max_hp(),
                    band_label(HealthBand::from_hp(party.hp(), party.max_hp())),
                    enemy.name(),
                    enemy.element(),
                    enemy.hp(),
                    enemy.max_hp(),
                    band_label(HealthBand::from_hp(enemy.hp(), enemy.max_hp())),
                    encounter,
                    state.encounters().len(),
                )?;
                self.strip_text(out, session, state.strip(), true)?;
            }
        }
        Ok(())
    }

    /// Free-form message: help text, parse errors, rejected moves.
    pub fn notice(&self, out: &mut impl Write, message: &str) -> Result<()> {
        match self.mode {
            OutputMode::Json => {
                let notice = json!({ "event": "notice", "message": message });
                serde_json::to_writer(&mut *out, &notice)?;
                writeln!(out)?;
            }
            OutputMode::Text => writeln!(out, "{message}")?,
        }
        Ok(())
    }

    fn event_text(
        &self,
        out: &mut impl Write,
        session: &Session,
        event: &SessionEvent,
    ) -> Result<()> {
        match event {
            SessionEvent::TurnStarted {
                turn,
                player_move,
                strip,
            } => {
                writeln!(out, "turn {turn}: {}", move_label(*player_move))?;
                self.strip_text(out, session, strip, false)?;
            }
            SessionEvent::Resolution {
                resolution,
                party_band,
                enemy_band,
            } => {
                let span = span_label(resolution.start, resolution.length);
                write!(
                    out,
                    "  combo {} {} x{} at {} (x{:.2}): ",
                    resolution.combo,
                    resolution.element,
                    resolution.length,
                    span,
                    resolution.multiplier
                )?;
                match resolution.effect {
                    Effect::Damage => writeln!(
                        out,
                        "{} deals {} damage, enemy {} [{}]",
                        resolution.ally.as_deref().unwrap_or("?"),
                        resolution.amount,
                        resolution.enemy_hp,
                        band_label(*enemy_band)
                    )?,
                    Effect::Heal => writeln!(
                        out,
                        "party heals {}, party {} [{}]",
                        resolution.amount,
                        resolution.party_hp,
                        band_label(*party_band)
                    )?,
                    Effect::NoEffect => writeln!(out, "nobody answers")?,
                }
                self.strip_text(out, session, &resolution.after_refill, false)?;
            }
            SessionEvent::CascadeTruncated { steps } => {
                writeln!(out, "  cascade stopped after {steps} steps")?;
            }
            SessionEvent::EnemyAttack { attack, party_band } => writeln!(
                out,
                "  {} attacks for {}, party {} [{}]",
                attack.enemy,
                attack.damage,
                attack.party_hp,
                band_label(*party_band)
            )?,
            SessionEvent::EncounterAdvanced {
                index,
                enemy,
                enemy_hp,
                strip,
            } => {
                writeln!(out, "{enemy} appears (hp {enemy_hp}), encounter {}", index + 1)?;
                self.strip_text(out, session, strip, false)?;
            }
            SessionEvent::Victory { turns } => {
                writeln!(out, "Victory in {turns} turns! `restart` to play again.")?;
            }
            SessionEvent::Defeat { enemy, .. } => {
                writeln!(out, "The party fell to {enemy}. `restart` to try again.")?;
            }
            SessionEvent::Restarted { strip, .. } => {
                writeln!(out, "Back to the first encounter.")?;
                self.strip_text(out, session, strip, false)?;
            }
        }
        Ok(())
    }

    fn strip_text(
        &self,
        out: &mut impl Write,
        session: &Session,
        strip: &Strip,
        labels: bool,
    ) -> Result<()> {
        let table = &session.config().elements;
        if labels {
            let line: Vec<String> = (0..gem_core::STRIP_LEN)
                .filter_map(Strip::slot_label)
                .map(|label| format!("{label} "))
                .collect();
            writeln!(out, "    {}", line.join(" "))?;
        }
        let line: Vec<String> = strip
            .iter()
            .map(|token| self.cell(table, token))
            .collect();
        writeln!(out, "    {}", line.join(" "))?;
        Ok(())
    }

    /// One slot, two columns wide.
    fn cell(&self, table: &ElementTable, token: Token) -> String {
        let display = table.display_for(token);
        let glyph = display.map_or(token.glyph(), |display| display.glyph);
        let padded = if glyph.is_ascii() {
            format!("{glyph} ")
        } else {
            glyph.to_string()
        };
        match display {
            Some(display) if self.color => {
                let [r, g, b] = display.color;
                format!("\x1b[38;2;{r};{g};{b}m{padded}\x1b[0m")
            }
            _ => padded,
        }
    }
}

fn band_label(band: HealthBand) -> &'static str {
    match band {
        HealthBand::Healthy => "healthy",
        HealthBand::Wounded => "wounded",
        HealthBand::Critical => "critical",
        HealthBand::Down => "down",
    }
}

fn label(index: usize) -> char {
    Strip::slot_label(index).unwrap_or('?')
}

fn span_label(start: usize, length: usize) -> String {
    format!("{}-{}", label(start), label(start + length - 1))
}

pub fn move_label(player_move: PlayerMove) -> String {
    match player_move {
        PlayerMove::Swap { a, b } => format!("swap {} {}", label(a), label(b)),
        PlayerMove::Drag { from, to } => format!("drag {} {}", label(from), label(to)),
    }
}
