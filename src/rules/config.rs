//! Game configuration: mode, elimination toggle, round-restart policy.
//!
//! All configuration is chosen from small fixed menus by the host and is
//! immutable for the lifetime of a game; only a reset back to setup lets
//! the host pick again.

use serde::{Deserialize, Serialize};

/// Difficulty: the upper bound of the secret range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Targets in `[1, 100]`.
    #[default]
    Easy,
    /// Targets in `[1, 1000]`.
    Hard,
}

impl Mode {
    /// Upper bound of the secret range.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Mode::Easy => 100,
            Mode::Hard => 1000,
        }
    }

    /// Longest legal guess in digits (3 for 1-100, 4 for 1-1000).
    ///
    /// Used by the host-side keypad buffer, not by validation: validation
    /// is purely a range-membership check.
    #[must_use]
    pub const fn digit_limit(self) -> usize {
        match self {
            Mode::Easy => 3,
            Mode::Hard => 4,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "1-{}", self.max())
    }
}

/// Who opens the round after an elimination.
///
/// `FirstAlive` always hands the new round to the lowest living id,
/// which is not necessarily the player after the loser. `AfterLoser`
/// is the arguably fairer rotation continuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Lowest living id starts the next round.
    #[default]
    FirstAlive,
    /// The living player after the round's loser starts.
    AfterLoser,
}

/// Immutable per-game configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Secret range, 1-100 or 1-1000.
    pub mode: Mode,
    /// A hit eliminates the guesser (multi-round) rather than ending the
    /// game (single round).
    pub elimination: bool,
    /// Round-restart turn policy. Only consulted in elimination games.
    pub restart_policy: RestartPolicy,
}

impl GameConfig {
    /// Classic single-round game.
    #[must_use]
    pub fn classic(mode: Mode) -> Self {
        Self {
            mode,
            elimination: false,
            restart_policy: RestartPolicy::default(),
        }
    }

    /// Elimination survival game.
    #[must_use]
    pub fn elimination(mode: Mode) -> Self {
        Self {
            mode,
            elimination: true,
            restart_policy: RestartPolicy::default(),
        }
    }

    /// Override the round-restart policy.
    #[must_use]
    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_bounds() {
        assert_eq!(Mode::Easy.max(), 100);
        assert_eq!(Mode::Hard.max(), 1000);
        assert_eq!(Mode::Easy.digit_limit(), 3);
        assert_eq!(Mode::Hard.digit_limit(), 4);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::Easy), "1-100");
        assert_eq!(format!("{}", Mode::Hard), "1-1000");
    }

    #[test]
    fn test_config_constructors() {
        let classic = GameConfig::classic(Mode::Hard);
        assert!(!classic.elimination);
        assert_eq!(classic.mode, Mode::Hard);

        let surv = GameConfig::elimination(Mode::Easy)
            .with_restart_policy(RestartPolicy::AfterLoser);
        assert!(surv.elimination);
        assert_eq!(surv.restart_policy, RestartPolicy::AfterLoser);
    }

    #[test]
    fn test_default_config_is_classic_easy() {
        let config = GameConfig::default();
        assert_eq!(config.mode, Mode::Easy);
        assert!(!config.elimination);
        assert_eq!(config.restart_policy, RestartPolicy::FirstAlive);
    }
}
