//! Turn management for a two-player game.
//!
//! [`Game`] owns both players' grids and moves through [`Phase`]s:
//! `Setup` until both fleets are placed, then strictly alternating turns
//! starting with player one, then `GameOver` as soon as a shot sinks the
//! last segment of either fleet.

use core::fmt;

use log::{debug, info};

use crate::common::{GameError, ShotResult};
use crate::coord::{validate_target, Coordinate};
use crate::grid::{OceanGrid, TrackingGrid};
use crate::placement::{place_fleet, PlacementRng};
use crate::shot::resolve_shot;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => f.write_str("Player 1"),
            PlayerId::Two => f.write_str("Player 2"),
        }
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Grids exist but fleets have not been placed.
    Setup,
    /// The given player is to fire next.
    Turn(PlayerId),
    /// A fleet was destroyed; no further turns.
    GameOver { winner: PlayerId },
}

/// A player's own grid and their view of the opponent, kept together so
/// only the game mutates either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerBoard {
    ocean: OceanGrid,
    tracking: TrackingGrid,
}

impl PlayerBoard {
    /// Grid holding this player's fleet.
    pub fn ocean(&self) -> &OceanGrid {
        &self.ocean
    }

    /// This player's record of shots at the opponent.
    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: PlayerId,
    pub target: Coordinate,
    pub result: ShotResult,
    /// Set when this shot ended the game.
    pub game_over: bool,
}

/// Core game state for both players.
#[derive(Clone, Debug)]
pub struct Game {
    players: [PlayerBoard; 2],
    phase: Phase,
    shots_fired: usize,
}

impl Game {
    /// Create a game in the setup phase with empty grids.
    pub fn new() -> Self {
        Game {
            players: [PlayerBoard::default(); 2],
            phase: Phase::Setup,
            shots_fired: 0,
        }
    }

    /// Start play from prepared grids, skipping random placement.
    ///
    /// If either grid already has no ship segments the game starts over.
    pub fn with_oceans(player_one: OceanGrid, player_two: OceanGrid) -> Self {
        let mut game = Game::new();
        game.players[0].ocean = player_one;
        game.players[1].ocean = player_two;
        game.phase = game.evaluate(PlayerId::Two);
        game
    }

    /// Place both fleets at random and hand the first turn to player one.
    pub fn setup<R>(&mut self, rng: &mut R) -> Result<(), GameError>
    where
        R: PlacementRng + ?Sized,
    {
        if self.phase != Phase::Setup {
            return Err(GameError::AlreadySetUp);
        }
        for player in [PlayerId::One, PlayerId::Two] {
            let placed = place_fleet(&mut self.players[player.index()].ocean, rng)?;
            debug!("{} fleet: {:?}", player, placed);
        }
        self.phase = Phase::Turn(PlayerId::One);
        info!("fleets placed, {} to fire first", PlayerId::One);
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose turn it is, if a turn is in progress.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn(player) => Some(player),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Grids belonging to `player`.
    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.players[player.index()]
    }

    /// Accepted shots across both players.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Validate `input` as the current player's next target without firing.
    pub fn validate(&self, input: &str) -> Result<Coordinate, GameError> {
        let shooter = self.current_player().ok_or(GameError::NotInPlay)?;
        validate_target(input, &self.board(shooter).tracking)
    }

    /// Fire the current player's shot at the target typed in `input`.
    ///
    /// Rejected input leaves every grid and the turn unchanged. An accepted
    /// shot passes the turn to the opponent unless it ended the game.
    pub fn fire(&mut self, input: &str) -> Result<ShotReport, GameError> {
        let shooter = self.current_player().ok_or(GameError::NotInPlay)?;
        let target = self.validate(input)?;

        let [one, two] = &mut self.players;
        let (attacker, defender) = match shooter {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let result = resolve_shot(&mut defender.ocean, &mut attacker.tracking, target);
        self.shots_fired += 1;
        debug!("{} fired at {}: {:?}", shooter, target, result);

        self.phase = self.evaluate(shooter);
        let game_over = self.is_over();
        if game_over {
            info!("{} wins after {} shots", shooter, self.shots_fired);
        }
        Ok(ShotReport {
            shooter,
            target,
            result,
            game_over,
        })
    }

    /// Phase following a move by `last`: over if either fleet is gone,
    /// otherwise the opponent's turn.
    fn evaluate(&self, last: PlayerId) -> Phase {
        let defender = last.opponent();
        if self.board(defender).ocean.all_sunk() {
            Phase::GameOver { winner: last }
        } else if self.board(last).ocean.all_sunk() {
            Phase::GameOver { winner: defender }
        } else {
            Phase::Turn(defender)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
