//! Tournament aggregate, lifecycle status, and error type.

use crate::models::player::{Player, PlayerId};
use crate::models::round::Round;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum roster size to start a tournament.
pub const MIN_PLAYERS: usize = 2;

/// Errors that can occur during tournament operations.
///
/// The pure standings/pairing functions never fail; these come from the
/// aggregate and the round lifecycle around them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Not enough players to start.
    NotEnoughPlayers { required: usize },
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found on the roster.
    PlayerNotFound(PlayerId),
    /// The current round still has matches without a recorded winner.
    IncompleteResults,
    /// The current round already has recorded results and cannot be regenerated.
    ResultsAlreadyRecorded,
    /// No match with this table number in the current round.
    MatchNotFound { table: u32 },
    /// Score string could not be parsed (expected e.g. "2-1").
    InvalidScore(String),
    /// Bye matches have a fixed result; no score entry is allowed.
    ByeMatch,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NotEnoughPlayers { required } => {
                write!(f, "Need at least {} players to start", required)
            }
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::IncompleteResults => {
                write!(f, "Not all matches of the current round have a result")
            }
            TournamentError::ResultsAlreadyRecorded => {
                write!(f, "Current round already has recorded results")
            }
            TournamentError::MatchNotFound { table } => {
                write!(f, "No match at table {}", table)
            }
            TournamentError::InvalidScore(s) => write!(f, "Invalid score \"{}\"", s),
            TournamentError::ByeMatch => write!(f, "Bye matches have a fixed result"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle phase of the tournament. Driven only by the aggregate's callers;
/// the standings/pairing core never inspects it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Adding players; no rounds yet.
    #[default]
    Setup,
    /// Rounds are being played.
    InProgress,
    /// Tournament finished.
    Completed,
}

/// Aggregate root: roster, round history, and lifecycle status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament in Setup with an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            rounds: Vec::new(),
            status: TournamentStatus::Setup,
            created_at: Utc::now(),
        }
    }

    /// Create a tournament with an initial roster. Still in Setup until started.
    pub fn with_players(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new(name)
        }
    }

    /// Look up a player on the roster by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The most recent round, if any rounds have been generated.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Add a player (only valid in Setup). Names must be non-empty and unique
    /// (case-insensitive); surrounding whitespace is trimmed.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(Player::new(name_trimmed));
        Ok(())
    }

    /// Remove a player by id (only valid in Setup).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Start the tournament: requires at least [`MIN_PLAYERS`] on the roster.
    pub fn start(&mut self) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(TournamentError::NotEnoughPlayers {
                required: MIN_PLAYERS,
            });
        }
        self.status = TournamentStatus::InProgress;
        Ok(())
    }

    /// Mark the tournament finished.
    pub fn complete(&mut self) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::InProgress {
            return Err(TournamentError::InvalidState);
        }
        self.status = TournamentStatus::Completed;
        Ok(())
    }

    /// Current standings, best to worst, derived from the full round history.
    pub fn standings(&self) -> Vec<Player> {
        crate::logic::calculate_standings(&self.players, &self.rounds)
    }
}
