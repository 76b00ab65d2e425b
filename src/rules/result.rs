//! Guess submission inputs and outcomes.
//!
//! `submit_guess` is total: every call returns a defined [`GuessResult`],
//! never an error that could halt the game. A rejection is a no-op commit;
//! the host gives transient feedback (a shake, a beep) and nothing in the
//! engine moves.

use serde::{Deserialize, Serialize};

use crate::core::Phase;

/// A raw guess candidate, before parsing.
///
/// Hosts hand over whatever they have: keypad buffer text or an already
/// numeric value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessInput {
    /// Unparsed text, e.g. the keypad buffer contents.
    Text(String),
    /// Already-numeric candidate.
    Number(i64),
}

impl GuessInput {
    /// Parse to an integer. `None` when the text is not a valid integer;
    /// range membership (including negatives being below any range) is
    /// the engine's check, not the parser's.
    #[must_use]
    pub fn parse(&self) -> Option<i64> {
        match self {
            GuessInput::Text(s) => s.trim().parse().ok(),
            GuessInput::Number(n) => Some(*n),
        }
    }
}

impl From<&str> for GuessInput {
    fn from(s: &str) -> Self {
        GuessInput::Text(s.to_string())
    }
}

impl From<String> for GuessInput {
    fn from(s: String) -> Self {
        GuessInput::Text(s)
    }
}

impl From<u32> for GuessInput {
    fn from(n: u32) -> Self {
        GuessInput::Number(i64::from(n))
    }
}

impl From<i64> for GuessInput {
    fn from(n: i64) -> Self {
        GuessInput::Number(n)
    }
}

/// Why a submission was rejected without touching state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Input did not parse to an integer.
    NotANumber,
    /// Parsed fine but sits outside the current candidate range.
    OutOfRange,
    /// No round is accepting guesses right now.
    NotPlaying,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            RejectReason::NotANumber => "not a number",
            RejectReason::OutOfRange => "outside the current range",
            RejectReason::NotPlaying => "no round in progress",
        };
        f.write_str(msg)
    }
}

/// What a committed guess told the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Below the target; the floor rises. Guess higher.
    Low,
    /// Above the target; the ceiling drops. Guess lower.
    High,
    /// The bomb went off.
    Hit,
}

/// Outcome of one `submit_guess` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessResult {
    /// No-op: state is exactly as it was before the call.
    Rejected(RejectReason),
    /// The guess was committed.
    Accepted {
        /// Low/high/hit.
        feedback: Feedback,
        /// Phase after the commit.
        phase: Phase,
    },
}

impl GuessResult {
    /// Was the guess committed?
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, GuessResult::Accepted { .. })
    }

    /// Feedback kind, if the guess was committed.
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        match self {
            GuessResult::Accepted { feedback, .. } => Some(*feedback),
            GuessResult::Rejected(_) => None,
        }
    }

    /// Phase after the commit, if the guess was committed.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            GuessResult::Accepted { phase, .. } => Some(*phase),
            GuessResult::Rejected(_) => None,
        }
    }
}
