//! Rules layer: configuration, the engine, and guess outcomes.

pub mod config;
pub mod engine;
pub mod result;

pub use config::{GameConfig, Mode, RestartPolicy};
pub use engine::GameEngine;
pub use result::{Feedback, GuessInput, GuessResult, RejectReason};
