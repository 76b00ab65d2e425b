//! Player identity and roster bookkeeping.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and assigned sequentially
//! at setup; they stay stable for the whole game.
//!
//! ## Roster
//!
//! Owns the players and answers the questions the engine asks every turn:
//! who is alive, who moves after a given player, who moves first in a
//! fresh round. Liveness only ever transitions alive -> eliminated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Player identifier, 1-based.
///
/// The first player is `PlayerId(1)`; `PlayerId::all(4)` yields ids 1-4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value (1-based).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use number_bomb::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// The name is a display label only; game logic keys off the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable 1-based id.
    pub id: PlayerId,
    /// Display label ("Player 3" by default).
    pub name: String,
    alive: bool,
}

impl Player {
    /// Create a player with the default display name.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            name: format!("{id}"),
            id,
            alive: true,
        }
    }

    /// Is this player still in the game?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// The seated players for one game, in ascending id order.
///
/// Rotation treats the living players as a cyclic sequence in ascending
/// id order; eliminated ids are skipped entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; 10]>,
}

impl Roster {
    /// Seat `player_count` players, all alive, ids `1..=player_count`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count >= 2, "Need at least 2 players");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            players: PlayerId::all(player_count).map(Player::new).collect(),
        }
    }

    /// Number of seated players (alive or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no players are seated. Rosters are never empty in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Is the given player alive?
    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.get(id).is_some_and(Player::is_alive)
    }

    /// Permanently eliminate a player. One-way; there is no revive.
    pub fn eliminate(&mut self, id: PlayerId) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            player.alive = false;
        }
    }

    /// All seated players, ascending id order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Ids of living players, ascending.
    #[must_use]
    pub fn survivors(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| p.id)
            .collect()
    }

    /// Number of living players.
    #[must_use]
    pub fn survivor_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Lowest living id, if anyone is left.
    #[must_use]
    pub fn first_alive(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.is_alive()).map(|p| p.id)
    }

    /// The living player immediately after `id` in ascending-id cyclic
    /// order, wrapping past the highest id. `id` itself need not be alive.
    ///
    /// Returns `None` only when nobody is alive.
    #[must_use]
    pub fn next_alive_after(&self, id: PlayerId) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| p.id)
            .find(|&pid| pid > id)
            .or_else(|| self.first_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.get(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(1));
        assert_eq!(players[3], PlayerId::new(4));
    }

    #[test]
    fn test_roster_new() {
        let roster = Roster::new(4);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.survivor_count(), 4);
        assert_eq!(roster.get(PlayerId::new(3)).unwrap().name, "Player 3");
        assert!(roster.is_alive(PlayerId::new(1)));
        assert!(!roster.is_alive(PlayerId::new(5)));
    }

    #[test]
    fn test_eliminate_is_one_way() {
        let mut roster = Roster::new(3);
        roster.eliminate(PlayerId::new(2));

        assert!(!roster.is_alive(PlayerId::new(2)));
        assert_eq!(roster.survivors(), vec![PlayerId::new(1), PlayerId::new(3)]);
        assert_eq!(roster.survivor_count(), 2);
    }

    #[test]
    fn test_next_alive_wraps() {
        let roster = Roster::new(4);
        assert_eq!(roster.next_alive_after(PlayerId::new(1)), Some(PlayerId::new(2)));
        assert_eq!(roster.next_alive_after(PlayerId::new(4)), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_next_alive_skips_eliminated() {
        let mut roster = Roster::new(4);
        roster.eliminate(PlayerId::new(2));
        roster.eliminate(PlayerId::new(4));

        assert_eq!(roster.next_alive_after(PlayerId::new(1)), Some(PlayerId::new(3)));
        assert_eq!(roster.next_alive_after(PlayerId::new(3)), Some(PlayerId::new(1)));
        // Works from a dead seat too (used by the after-loser restart policy).
        assert_eq!(roster.next_alive_after(PlayerId::new(2)), Some(PlayerId::new(3)));
    }

    #[test]
    fn test_first_alive() {
        let mut roster = Roster::new(3);
        assert_eq!(roster.first_alive(), Some(PlayerId::new(1)));

        roster.eliminate(PlayerId::new(1));
        assert_eq!(roster.first_alive(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_roster_serialization() {
        let mut roster = Roster::new(2);
        roster.eliminate(PlayerId::new(1));

        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, back);
    }

    #[test]
    #[should_panic(expected = "Need at least 2 players")]
    fn test_roster_rejects_solo() {
        let _ = Roster::new(1);
    }
}
