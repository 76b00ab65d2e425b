//! Hook point for an external commentary generator.
//!
//! The table can show a short taunt line between turns, typically backed
//! by an LLM. Its content is flavor, so the contract here is all about
//! isolation:
//!
//! - the engine only produces a [`CommentaryContext`] snapshot; it never
//!   waits on a provider,
//! - any provider failure degrades to a canned line via
//!   [`comment_or_fallback`] and can never reach game logic,
//! - contexts are stamped with the engine's move serial, so a reply that
//!   arrives after the state moved on is detectably stale
//!   ([`GameEngine::is_current`]) and gets dropped, not applied.
//!
//! Hosts that fetch commentary asynchronously do so on their own runtime;
//! the engine stays synchronous.
//!
//! [`GameEngine::is_current`]: crate::rules::GameEngine::is_current

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Range};

/// Fallback line shown when a provider fails or times out.
pub const FALLBACK_LINE: &str = "The bomb keeps ticking... tick-tock.";

/// Snapshot of the table for a commentary request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryContext {
    /// Current candidate range.
    pub range: Range,
    /// Player about to guess (the taunt target).
    pub current_player: PlayerId,
    /// Whether this is an elimination game.
    pub elimination: bool,
    /// The previous player's missed guess, if any this round.
    pub last_guess: Option<u32>,
    serial: u64,
}

impl CommentaryContext {
    pub(crate) fn new(
        range: Range,
        current_player: PlayerId,
        elimination: bool,
        last_guess: Option<u32>,
        serial: u64,
    ) -> Self {
        Self {
            range,
            current_player,
            elimination,
            last_guess,
            serial,
        }
    }

    /// Move serial this context was captured at.
    #[must_use]
    pub const fn serial(&self) -> u64 {
        self.serial
    }
}

/// A provider failed to produce a line.
///
/// Carries a message for the host's logs; hosts never show it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentaryError {
    message: String,
}

impl CommentaryError {
    /// Wrap a provider failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommentaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "commentary failed: {}", self.message)
    }
}

impl std::error::Error for CommentaryError {}

/// Produces a short display line for the current table state.
///
/// Implementations may be arbitrarily unreliable; callers go through
/// [`comment_or_fallback`] so a failure is worth exactly one canned line.
pub trait CommentaryProvider {
    /// Produce a line for this context.
    ///
    /// # Errors
    ///
    /// Any failure the provider wants surfaced to the host's logs.
    fn comment(&mut self, context: &CommentaryContext) -> Result<String, CommentaryError>;
}

/// Canned commentary, cycling a fixed set of lines. Never fails.
///
/// The default provider when no generator is wired up, and the natural
/// fallback provider for tests.
#[derive(Clone, Debug)]
pub struct StaticCommentary {
    lines: Vec<String>,
    next: usize,
}

impl StaticCommentary {
    /// Cycle the given lines, in order.
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        assert!(!lines.is_empty(), "Need at least one commentary line");
        Self { lines, next: 0 }
    }
}

impl Default for StaticCommentary {
    fn default() -> Self {
        Self::new([
            "Choose fast, the clock is not your friend.",
            "Plenty of safe numbers left. Probably.",
            "That range is getting awfully small.",
            "No pressure. It is only a bomb.",
        ])
    }
}

impl CommentaryProvider for StaticCommentary {
    fn comment(&mut self, _context: &CommentaryContext) -> Result<String, CommentaryError> {
        let line = self.lines[self.next % self.lines.len()].clone();
        self.next += 1;
        Ok(line)
    }
}

/// Ask a provider for a line, degrading to [`FALLBACK_LINE`] on failure.
///
/// This is the only call path hosts should use; it guarantees commentary
/// can never surface an error.
pub fn comment_or_fallback(
    provider: &mut dyn CommentaryProvider,
    context: &CommentaryContext,
) -> String {
    match provider.comment(context) {
        Ok(line) => line,
        Err(err) => {
            log::warn!("{err}; using fallback line");
            FALLBACK_LINE.to_string()
        }
    }
}
