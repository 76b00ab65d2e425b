//! # number-bomb
//!
//! Turn-based engine for an "avoid the secret number" party game on a
//! single shared device. Players take turns guessing inside a shrinking
//! range; whoever names the hidden target sets off the bomb.
//!
//! ## Design Principles
//!
//! 1. **One owned state container**: all live state sits in the engine
//!    and moves only through its operations. Hosts read snapshots and
//!    issue commands; there are no shared mutable pieces to race.
//!
//! 2. **Total operations**: every command returns a defined result. Bad
//!    guesses are rejections, not errors; nothing the host can submit
//!    crashes a game in progress.
//!
//! 3. **Injectable randomness**: the secret draw goes through the
//!    [`core::TargetSource`] trait, so a seeded game replays exactly and
//!    tests script their targets.
//!
//! ## Modes
//!
//! - **Classic**: one round; the first hit ends the game.
//! - **Elimination**: a hit removes the guesser; rounds continue until a
//!   single champion survives.
//!
//! ## Modules
//!
//! - `core`: players, ranges, round state, RNG
//! - `rules`: configuration, the engine, guess outcomes
//! - `input`: host-side keypad buffer adapter
//! - `commentary`: hook for an external taunt/commentary generator
//!
//! ## Example
//!
//! ```
//! use number_bomb::{GameConfig, GameEngine, Mode, Phase, ScriptedTargets};
//!
//! let config = GameConfig::elimination(Mode::Easy);
//! let mut engine = GameEngine::with_rng(config, Box::new(ScriptedTargets::new([42, 17])));
//! engine.setup_game(2);
//!
//! engine.submit_guess(70u32); // Player 1: high
//! engine.submit_guess(42u32); // Player 2 hits the bomb
//!
//! assert_eq!(engine.phase(), Phase::Champion);
//! assert_eq!(engine.champion(), engine.players().first().map(|p| p.id));
//! ```

pub mod commentary;
pub mod core;
pub mod input;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GuessEntry, Phase, Player, PlayerId, Range, Roster, RoundState, ScriptedTargets,
    TargetSource,
};

pub use crate::rules::{
    Feedback, GameConfig, GameEngine, GuessInput, GuessResult, Mode, RejectReason, RestartPolicy,
};

pub use crate::input::GuessBuffer;

pub use crate::commentary::{
    comment_or_fallback, CommentaryContext, CommentaryError, CommentaryProvider, StaticCommentary,
    FALLBACK_LINE,
};
