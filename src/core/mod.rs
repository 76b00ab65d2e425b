//! Core types: players, ranges, round state, RNG.
//!
//! These are the building blocks the engine operates on. Nothing here
//! knows about modes, elimination, or phase transitions; that lives in
//! [`crate::rules`].

pub mod player;
pub mod range;
pub mod rng;
pub mod state;

pub use player::{Player, PlayerId, Roster};
pub use range::Range;
pub use rng::{GameRng, ScriptedTargets, TargetSource};
pub use state::{GuessEntry, Phase, RoundState};
