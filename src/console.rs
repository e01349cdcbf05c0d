#![cfg(feature = "std")]
//! Text console front end: prompts the current player, re-prompts on bad
//! input, and reports each shot until the game ends.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::debug;

use crate::common::GameError;
use crate::game::{Game, PlayerId, ShotReport};

pub const TARGET_PROMPT: &str = "Enter target (for example A5): ";
pub const INVALID_INPUT: &str = "Invalid input, try again.";
pub const ALREADY_SHOT: &str = "You already shot here, try again.";
pub const GAME_OVER: &str = "Game Over!";

/// Line-based input paired with a text output.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            line: String::new(),
        }
    }

    /// Give back the output, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line with its terminator stripped.
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<&str>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("flushing prompt")?;
        self.line.clear();
        if self.input.read_line(&mut self.line).context("reading input")? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\n', '\r'])))
    }

    /// Play one turn for the current player: show their tracking grid, read
    /// targets until one is accepted, then report the result.
    ///
    /// Returns `None` if input ran out before a shot was accepted.
    pub fn take_turn(&mut self, game: &mut Game) -> anyhow::Result<Option<ShotReport>> {
        let player = game
            .current_player()
            .ok_or(GameError::NotInPlay)
            .context("no turn in progress")?;
        writeln!(self.output, "{}'s turn:", player)?;
        writeln!(self.output, "{}", game.board(player).tracking())?;

        loop {
            let Some(input) = self.read_line(TARGET_PROMPT)? else {
                return Ok(None);
            };
            match game.fire(input) {
                Ok(report) => {
                    writeln!(self.output, "{}", report.result)?;
                    return Ok(Some(report));
                }
                Err(GameError::InvalidCoordinate(e)) => {
                    debug!("{} entered {:?}: {}", player, input, e);
                    writeln!(self.output, "{}", INVALID_INPUT)?;
                }
                Err(GameError::AlreadyTargeted(target)) => {
                    debug!("{} repeated {}", player, target);
                    writeln!(self.output, "{}", ALREADY_SHOT)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Alternate turns until the game ends and return the winner, or `None`
    /// if the input closed first.
    pub fn play(&mut self, game: &mut Game) -> anyhow::Result<Option<PlayerId>> {
        while !game.is_over() {
            if self.take_turn(game)?.is_none() {
                return Ok(None);
            }
        }
        let winner = game.winner().context("finished game has no winner")?;
        writeln!(self.output, "{}", GAME_OVER)?;
        writeln!(
            self.output,
            "{} wins after {} shots.",
            winner,
            game.shots_fired()
        )?;
        self.output.flush()?;
        Ok(Some(winner))
    }
}
