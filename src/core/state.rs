//! Round state: the engine's live working state for one round.
//!
//! ## Phase
//!
//! The game-level state machine. `Setup` is the initial state and the
//! only state a reset lands in; `Champion` and `GameOver` are terminal
//! until a reset.
//!
//! ## RoundState
//!
//! Everything scoped to the current round: the hidden target, the
//! candidate range, whose turn it is, the most-recent-first guess log,
//! and the round's loser once there is one. Exclusively owned and
//! mutated by the engine; hosts read snapshots through accessors.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::range::Range;

/// Game-level phase.
///
/// ```text
/// setup --setup_game--> playing
/// playing --miss--> playing (rotated turn, narrowed range)
/// playing --hit, classic--> gameover            [terminal]
/// playing --hit, elimination, survivors > 1--> round_over
/// playing --hit, elimination, survivors == 1--> champion  [terminal]
/// round_over --start_new_round--> playing
/// champion | gameover --reset--> setup
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No game in progress; waiting for configuration.
    Setup,
    /// A round is live and accepting guesses.
    Playing,
    /// Elimination round ended, more than one survivor remains.
    RoundOver,
    /// Elimination game ended with a sole survivor.
    Champion,
    /// Classic game ended on the first hit.
    #[serde(rename = "gameover")]
    GameOver,
}

impl Phase {
    /// Terminal phases stay put until an explicit reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Champion | Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Playing => "playing",
            Phase::RoundOver => "round_over",
            Phase::Champion => "champion",
            Phase::GameOver => "gameover",
        };
        f.write_str(name)
    }
}

/// One committed guess. Immutable once created.
///
/// `sequence` is a monotonic per-game counter, so entries order the same
/// way on every replay of a seeded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEntry {
    /// Who guessed.
    pub player: PlayerId,
    /// The guessed value.
    pub value: u32,
    /// Monotonic creation order within the game.
    pub sequence: u64,
}

/// Live working state for the current round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// The hidden target. Never exposed while the round is live.
    pub(crate) target: u32,
    /// Candidate interval; the undiscovered target is always inside it.
    pub(crate) range: Range,
    /// Whose turn it is. Always a living player's id.
    pub(crate) current_player: PlayerId,
    /// The player who hit the target this round, once someone has.
    pub(crate) last_loser: Option<PlayerId>,
    /// Guess log, most recent first, cleared at round start.
    pub(crate) history: Vector<GuessEntry>,
}

impl RoundState {
    /// Open a fresh round: full range, empty history, no loser yet.
    #[must_use]
    pub(crate) fn new(target: u32, mode_max: u32, starting_player: PlayerId) -> Self {
        let range = Range::full(mode_max);
        debug_assert!(range.contains(target));

        Self {
            target,
            range,
            current_player: starting_player,
            last_loser: None,
            history: Vector::new(),
        }
    }

    /// Current candidate interval.
    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// This round's loser, if the target has been hit.
    #[must_use]
    pub fn last_loser(&self) -> Option<PlayerId> {
        self.last_loser
    }

    /// Guess log, most recent first. `im::Vector` clones are O(1), so
    /// hosts can keep a snapshot per render cheaply.
    #[must_use]
    pub fn history(&self) -> Vector<GuessEntry> {
        self.history.clone()
    }

    /// Most recent committed guess, if any.
    #[must_use]
    pub fn last_guess(&self) -> Option<GuessEntry> {
        self.history.front().copied()
    }
}
