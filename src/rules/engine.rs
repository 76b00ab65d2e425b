//! The game engine: owns all state, enforces all rules.
//!
//! One engine instance runs one table. The host (UI, CLI, or test
//! harness) configures it, calls [`GameEngine::setup_game`], then feeds
//! it guesses and renders the snapshots it reads back. Every operation
//! is synchronous and atomic: it fully completes, including the phase
//! transition, before the host can issue another.

use log::{debug, info};

use crate::commentary::CommentaryContext;
use crate::core::{GameRng, GuessEntry, Phase, Player, PlayerId, Range, Roster, RoundState, TargetSource};
use crate::input::GuessBuffer;

use super::config::{GameConfig, RestartPolicy};
use super::result::{Feedback, GuessInput, GuessResult, RejectReason};

/// Turn-based "avoid the secret number" engine.
///
/// ```
/// use number_bomb::core::ScriptedTargets;
/// use number_bomb::rules::{Feedback, GameConfig, GameEngine, Mode};
///
/// let config = GameConfig::classic(Mode::Easy);
/// let mut engine = GameEngine::with_rng(config, Box::new(ScriptedTargets::new([42])));
/// engine.setup_game(2);
///
/// let result = engine.submit_guess(70u32);
/// assert_eq!(result.feedback(), Some(Feedback::High));
/// assert_eq!(engine.range().unwrap().max(), 69);
/// ```
pub struct GameEngine {
    config: GameConfig,
    rng: Box<dyn TargetSource>,
    phase: Phase,
    roster: Option<Roster>,
    round: Option<RoundState>,
    /// Bumped on every round start and committed guess. Orders history
    /// entries and lets hosts discard stale commentary replies.
    move_serial: u64,
    status: String,
    feedback_line: String,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded RNG (production play).
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, Box::new(GameRng::from_entropy()))
    }

    /// Create an engine with an injected target source.
    ///
    /// Tests pass a seeded [`GameRng`] or a
    /// [`ScriptedTargets`](crate::core::ScriptedTargets) sequence.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: Box<dyn TargetSource>) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Setup,
            roster: None,
            round: None,
            move_serial: 0,
            status: String::from("Pick a player count to start"),
            feedback_line: String::new(),
        }
    }

    // === Commands ===

    /// Seat `player_count` players (ids 1..=count, all alive) and start
    /// the first round with player 1 to move.
    ///
    /// Panics if called outside `Setup` or with fewer than 2 players; the
    /// host draws the count from a fixed menu, so either is a programming
    /// error, not a runtime condition.
    pub fn setup_game(&mut self, player_count: usize) {
        assert!(
            self.phase == Phase::Setup,
            "setup_game requires the setup phase (currently {})",
            self.phase
        );

        self.roster = Some(Roster::new(player_count));
        info!(
            "game start: {} players, mode {}, elimination={}",
            player_count, self.config.mode, self.config.elimination
        );
        self.start_new_round(PlayerId::new(1));
    }

    /// Start a fresh round: new target, full range, cleared history.
    ///
    /// Valid from `Setup` (via [`setup_game`](Self::setup_game)) and from
    /// `RoundOver`. The roster carries over unchanged, eliminations
    /// included. Panics if fewer than 2 players are alive or the starting
    /// player is dead; elimination already terminates at one survivor, so
    /// reaching here otherwise is an invariant violation.
    pub fn start_new_round(&mut self, starting_player: PlayerId) {
        assert!(
            matches!(self.phase, Phase::Setup | Phase::RoundOver),
            "start_new_round requires setup or round_over (currently {})",
            self.phase
        );
        let roster = self.roster.as_ref().expect("start_new_round before setup_game");
        assert!(roster.survivor_count() >= 2, "Need at least 2 living players");
        assert!(
            roster.is_alive(starting_player),
            "{starting_player} cannot start a round: eliminated"
        );

        let max = self.config.mode.max();
        let target = self.rng.next_target(max);
        debug_assert!((1..=max).contains(&target));

        self.round = Some(RoundState::new(target, max, starting_player));
        self.phase = Phase::Playing;
        self.move_serial += 1;
        self.status = format!("The secret number is between 1 and {max}");
        self.feedback_line = String::from("Bomb armed. Careful!");

        info!("round start: {starting_player} to move, range 1 - {max}");
        debug!("round target drawn: {target}");
    }

    /// Start the next round out of `RoundOver`, choosing the opener per
    /// the configured [`RestartPolicy`].
    pub fn next_round(&mut self) {
        assert!(
            self.phase == Phase::RoundOver,
            "next_round requires round_over (currently {})",
            self.phase
        );
        let roster = self.roster.as_ref().expect("round_over without a roster");

        let starting = match self.config.restart_policy {
            RestartPolicy::FirstAlive => roster.first_alive(),
            RestartPolicy::AfterLoser => {
                let loser = self
                    .round
                    .as_ref()
                    .and_then(RoundState::last_loser)
                    .expect("round_over without a loser");
                roster.next_alive_after(loser)
            }
        }
        .expect("round_over with nobody alive");

        self.start_new_round(starting);
    }

    /// Submit a guess for the current player.
    ///
    /// Total: always returns a defined result. Rejections (not a number,
    /// outside the range, no live round) leave every piece of state
    /// untouched; the host shows transient negative feedback and play
    /// continues.
    pub fn submit_guess(&mut self, input: impl Into<GuessInput>) -> GuessResult {
        let input = input.into();

        if self.phase != Phase::Playing {
            debug!("guess rejected: no round in progress");
            return GuessResult::Rejected(RejectReason::NotPlaying);
        }

        let Some(raw) = input.parse() else {
            debug!("guess rejected: {input:?} is not a number");
            return GuessResult::Rejected(RejectReason::NotANumber);
        };

        let round = self.round.as_mut().expect("playing without a round");
        let value = match u32::try_from(raw) {
            Ok(v) if round.range.contains(v) => v,
            _ => {
                debug!("guess rejected: {raw} outside {}", round.range);
                return GuessResult::Rejected(RejectReason::OutOfRange);
            }
        };

        let guesser = round.current_player;
        round.history.push_front(GuessEntry {
            player: guesser,
            value,
            sequence: self.move_serial,
        });
        self.move_serial += 1;

        let feedback = if value == round.target {
            self.resolve_hit(guesser)
        } else if value < round.target {
            round.range.raise_min(value);
            let range = round.range;
            self.rotate_turn(guesser);
            self.feedback_line = format!("Too low. Range: {range}");
            Feedback::Low
        } else {
            round.range.lower_max(value);
            let range = round.range;
            self.rotate_turn(guesser);
            self.feedback_line = format!("Too high. Range: {range}");
            Feedback::High
        };

        debug!("{guesser} guessed {value}: {feedback:?}");
        GuessResult::Accepted {
            feedback,
            phase: self.phase,
        }
    }

    /// Submit the keypad buffer's contents, draining it on acceptance.
    ///
    /// A rejected buffer is left as typed so the host can shake it at the
    /// player instead of wiping it.
    pub fn submit_buffer(&mut self, buffer: &mut GuessBuffer) -> GuessResult {
        let result = self.submit_guess(buffer.as_str());
        if result.accepted() {
            buffer.clear();
        }
        result
    }

    /// Return to `Setup`, discarding the roster and all round state.
    ///
    /// Valid from any phase and idempotent.
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
        self.roster = None;
        self.round = None;
        self.status = String::from("Pick a player count to start");
        self.feedback_line = String::new();
        info!("engine reset to setup");
    }

    // === Hit/turn internals ===

    fn resolve_hit(&mut self, guesser: PlayerId) -> Feedback {
        let round = self.round.as_mut().expect("playing without a round");
        round.last_loser = Some(guesser);
        let target = round.target;
        self.feedback_line = format!("Boom! The bomb went off on {target}");

        if self.config.elimination {
            let roster = self.roster.as_mut().expect("playing without a roster");
            roster.eliminate(guesser);
            info!("{guesser} hit {target} and is eliminated");

            if roster.survivor_count() == 1 {
                let champion = roster.first_alive().expect("one survivor");
                self.phase = Phase::Champion;
                self.status = format!("{champion} survives the last bomb");
                info!("{champion} is the champion");
            } else {
                self.phase = Phase::RoundOver;
                self.status = format!("{guesser} is out");
            }
        } else {
            self.phase = Phase::GameOver;
            self.status = String::from("Game over");
            info!("{guesser} hit {target}; game over");
        }

        Feedback::Hit
    }

    /// Hand the turn to the next living player after `current` in
    /// ascending-id cyclic order. Recomputed from the roster every time,
    /// since eliminations change who counts as living.
    fn rotate_turn(&mut self, current: PlayerId) {
        let roster = self.roster.as_ref().expect("playing without a roster");
        let next = roster
            .next_alive_after(current)
            .expect("rotation with nobody alive");

        let round = self.round.as_mut().expect("playing without a round");
        round.current_player = next;
        self.status = format!("{next}'s turn");
    }

    // === Snapshot accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The immutable game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seated players with liveness, ascending id order. Empty in `Setup`.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.as_ref().map_or(&[], Roster::players)
    }

    /// Ids of living players, ascending.
    #[must_use]
    pub fn survivors(&self) -> Vec<PlayerId> {
        self.roster.as_ref().map_or_else(Vec::new, Roster::survivors)
    }

    /// Current candidate range, while a round exists.
    #[must_use]
    pub fn range(&self) -> Option<Range> {
        self.round.as_ref().map(RoundState::range)
    }

    /// Whose turn it is, while a round exists.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.round.as_ref().map(RoundState::current_player)
    }

    /// Guess log for the current round, most recent first.
    #[must_use]
    pub fn history(&self) -> im::Vector<GuessEntry> {
        self.round.as_ref().map_or_else(im::Vector::new, RoundState::history)
    }

    /// The player who most recently hit the target this round.
    #[must_use]
    pub fn last_loser(&self) -> Option<PlayerId> {
        self.round.as_ref().and_then(RoundState::last_loser)
    }

    /// The sole survivor, once the phase is `Champion`.
    #[must_use]
    pub fn champion(&self) -> Option<PlayerId> {
        if self.phase == Phase::Champion {
            self.roster.as_ref().and_then(Roster::first_alive)
        } else {
            None
        }
    }

    /// The secret target, exposed only once the round is over (for the
    /// round-summary and terminal screens). Always `None` while playing.
    #[must_use]
    pub fn target_number(&self) -> Option<u32> {
        match self.phase {
            Phase::RoundOver | Phase::Champion | Phase::GameOver => {
                self.round.as_ref().map(|r| r.target)
            }
            Phase::Setup | Phase::Playing => None,
        }
    }

    /// Human-readable line for the status panel.
    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status
    }

    /// Human-readable line for the feedback banner.
    #[must_use]
    pub fn last_feedback(&self) -> &str {
        &self.feedback_line
    }

    // === Commentary hook ===

    /// Snapshot for an external commentary generator, stamped with the
    /// current move serial. `None` outside a live round.
    #[must_use]
    pub fn commentary_context(&self) -> Option<CommentaryContext> {
        if self.phase != Phase::Playing {
            return None;
        }
        let round = self.round.as_ref()?;
        Some(CommentaryContext::new(
            round.range,
            round.current_player,
            self.config.elimination,
            round.last_guess().map(|entry| entry.value),
            self.move_serial,
        ))
    }

    /// Is a commentary context still current, or did the state move on?
    ///
    /// Hosts call this when an async reply lands; a stale reply is
    /// dropped, never applied.
    #[must_use]
    pub fn is_current(&self, context: &CommentaryContext) -> bool {
        self.phase == Phase::Playing && context.serial() == self.move_serial
    }
}
