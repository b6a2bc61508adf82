//! Leaderboard operations over the player registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::array::DynamicArray;
use crate::error::{CommandError, Result};
use crate::ranking::heap_sort;
use crate::registry::{Player, PlayerRegistry};

/// Which players a ranked listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only players with at least one recorded score.
    Scored,
    /// Every registered player; unscored players rank last.
    All,
}

/// One row of a ranked listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the listing.
    pub rank: usize,
    pub name: String,
    pub best: Option<i64>,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-> {}. {} | best={}",
            self.rank,
            self.name,
            ScoreText(self.best)
        )
    }
}

/// Renders an optional score, printing `NONE` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreText(pub Option<i64>);

impl fmt::Display for ScoreText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(score) => write!(f, "{}", score),
            None => write!(f, "NONE"),
        }
    }
}

/// The state of one session: a registry of players and their scores.
#[derive(Debug, Default)]
pub struct Leaderboard {
    registry: PlayerRegistry,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player, failing with [`CommandError::NotFound`].
    pub fn player(&self, name: &str) -> Result<&Player> {
        self.registry.find(name).ok_or(CommandError::NotFound)
    }

    /// `true` if a player with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.find(name).is_some()
    }

    /// Register a player, rejecting empty and already-taken names.
    pub fn add_player(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        if self.registry.add(name) {
            Ok(())
        } else {
            Err(CommandError::Duplicate)
        }
    }

    /// Record a score for an existing player.
    pub fn add_score(&mut self, name: &str, score: i64) -> Result<()> {
        let player = self
            .registry
            .find_mut(name)
            .ok_or(CommandError::NotFound)?;
        player.record_score(score);
        tracing::debug!(player = name, score, best = ?player.best(), "score recorded");
        Ok(())
    }

    /// Up to `limit` of the player's scores, most recent first.
    pub fn history(&self, name: &str, limit: usize) -> Result<Vec<i64>> {
        Ok(self.player(name)?.history().iterate(limit).collect())
    }

    /// Rank the players in `scope` from best to worst.
    pub fn standings(&self, scope: Scope) -> Result<Vec<Standing>> {
        let mut snapshot: DynamicArray<&Player> = self
            .registry
            .iter()
            .filter(|player| scope == Scope::All || player.best().is_some())
            .collect();
        heap_sort(&mut snapshot)?;

        Ok(snapshot
            .iter()
            .enumerate()
            .map(|(index, player)| Standing {
                rank: index + 1,
                name: player.name().to_string(),
                best: player.best(),
            })
            .collect())
    }

    /// Remove a player and their history.
    pub fn remove_player(&mut self, name: &str) -> Result<()> {
        if self.registry.remove(name) {
            Ok(())
        } else {
            Err(CommandError::NotFound)
        }
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.registry.count()
    }

    /// `true` when no players are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(entries: &[(&str, Vec<i64>)]) -> Leaderboard {
        let mut board = Leaderboard::new();
        for (name, scores) in entries {
            board.add_player(name).unwrap();
            for &score in scores {
                board.add_score(name, score).unwrap();
            }
        }
        board
    }

    #[test]
    fn add_player_rejects_empty_and_duplicate_names() {
        let mut board = Leaderboard::new();
        assert_eq!(board.add_player(""), Err(CommandError::EmptyName));
        board.add_player("alice").unwrap();
        assert_eq!(board.add_player("alice"), Err(CommandError::Duplicate));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn add_score_requires_existing_player() {
        let mut board = Leaderboard::new();
        assert_eq!(board.add_score("nobody", 5), Err(CommandError::NotFound));
    }

    #[test]
    fn best_is_maximum_of_random_scores() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(3);
        let mut board = board_with(&[("alice", vec![])]);
        let mut submitted = Vec::new();
        for _ in 0..100 {
            let score = rng.gen_range(-1000..1000);
            board.add_score("alice", score).unwrap();
            submitted.push(score);
        }

        let alice = board.player("alice").unwrap();
        assert_eq!(alice.best(), submitted.iter().copied().max());

        let expected: Vec<i64> = submitted.iter().rev().copied().collect();
        assert_eq!(board.history("alice", usize::MAX).unwrap(), expected);
    }

    #[test]
    fn standings_respect_scope() {
        let board = board_with(&[
            ("carol", vec![3]),
            ("bob", vec![]),
            ("alice", vec![3, 1]),
            ("dan", vec![9]),
        ]);

        let scored = board.standings(Scope::Scored).unwrap();
        let names: Vec<_> = scored.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["dan", "alice", "carol"]);

        let all = board.standings(Scope::All).unwrap();
        assert_eq!(
            all.last(),
            Some(&Standing {
                rank: 4,
                name: "bob".to_string(),
                best: None,
            })
        );
    }

    #[test]
    fn standing_renders_protocol_line() {
        let scored = Standing {
            rank: 1,
            name: "alice".to_string(),
            best: Some(15),
        };
        let unscored = Standing {
            rank: 2,
            name: "bob".to_string(),
            best: None,
        };
        assert_eq!(scored.to_string(), "-> 1. alice | best=15");
        assert_eq!(unscored.to_string(), "-> 2. bob | best=NONE");
    }

    #[test]
    fn standing_serializes_to_json() {
        let standing = Standing {
            rank: 3,
            name: "erin".to_string(),
            best: None,
        };
        let json = serde_json::to_value(&standing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rank": 3, "name": "erin", "best": null })
        );
    }

    #[test]
    fn removed_player_comes_back_empty() {
        let mut board = board_with(&[("alice", vec![50])]);
        board.remove_player("alice").unwrap();
        assert_eq!(board.remove_player("alice"), Err(CommandError::NotFound));
        board.add_player("alice").unwrap();
        assert_eq!(board.player("alice").unwrap().best(), None);
        assert!(board.history("alice", 10).unwrap().is_empty());
    }

    #[test]
    fn clear_resets_count() {
        let mut board = board_with(&[("a", vec![1]), ("b", vec![])]);
        board.clear();
        assert!(board.is_empty());
        assert!(!board.contains("a"));
        assert_eq!(board.standings(Scope::All).unwrap(), Vec::new());
    }
}
