//! Player registry keyed by unique name.

use std::collections::HashMap;

use crate::history::ScoreHistory;

/// A registered player with their score history.
///
/// `best` is `None` exactly when the history is empty, and otherwise
/// equals the highest score in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    best: Option<i64>,
    history: ScoreHistory,
}

impl Player {
    /// Create a player with no recorded scores.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            best: None,
            history: ScoreHistory::new(),
        }
    }

    /// The player's unique, case-sensitive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Highest recorded score, `None` before the first one.
    pub fn best(&self) -> Option<i64> {
        self.best
    }

    /// Every score this player submitted.
    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Record a new score and raise `best` if it is exceeded.
    pub fn record_score(&mut self, score: i64) {
        self.history.prepend(score);
        if self.best.map_or(true, |best| score > best) {
            self.best = Some(score);
        }
        debug_assert_eq!(self.best, self.history.max());
    }
}

/// Owns every player in a session.
///
/// Players live in slots of an arena; freed slots are recycled. A name
/// index maps each name to its slot so lookups never walk the arena.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    slots: Vec<Option<Player>>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&Player> {
        let slot = *self.index.get(name)?;
        self.slots[slot].as_ref()
    }

    /// Mutable variant of [`PlayerRegistry::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        let slot = *self.index.get(name)?;
        self.slots[slot].as_mut()
    }

    /// Register a new player. Returns `false` without changing anything if
    /// the name is already taken.
    pub fn add(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }

        let player = Player::new(name);
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(player);
                slot
            }
            None => {
                self.slots.push(Some(player));
                self.slots.len() - 1
            }
        };
        self.index.insert(name.to_string(), slot);
        tracing::debug!(player = name, slot, "player registered");
        true
    }

    /// Remove a player along with their history. Returns `false` if no
    /// player has that name.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(slot) = self.index.remove(name) else {
            return false;
        };
        self.slots[slot] = None;
        self.free.push(slot);
        tracing::debug!(player = name, slot, "player removed");
        true
    }

    /// Drop every player.
    pub fn clear(&mut self) {
        let removed = self.index.len();
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        tracing::debug!(removed, "registry cleared");
    }

    /// Number of registered players.
    pub fn count(&self) -> usize {
        self.index.len()
    }

    /// `true` when no players are registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over all players. The order carries no meaning; ranked
    /// output always goes through a sort.
    pub fn iter(&self) -> impl Iterator<Item = &Player> + '_ {
        self.slots.iter().flatten()
    }
}
