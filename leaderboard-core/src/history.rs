//! Per-player record of submitted scores.

/// Scores submitted by one player, read back most recent first.
///
/// Scores are stored in submission order and iterated in reverse, which
/// keeps `prepend` O(1) amortized without a linked list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreHistory {
    scores: Vec<i64>,
}

impl ScoreHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` as the most recent entry.
    pub fn prepend(&mut self, score: i64) {
        self.scores.push(score);
    }

    /// Up to `limit` scores, most recent first.
    ///
    /// The iterator borrows the history, so calling this again restarts
    /// from the most recent score.
    pub fn iterate(&self, limit: usize) -> impl Iterator<Item = i64> + '_ {
        self.scores.iter().rev().take(limit).copied()
    }

    /// The latest score, if any.
    pub fn most_recent(&self) -> Option<i64> {
        self.scores.last().copied()
    }

    /// `true` until the first score is recorded.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of recorded scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Highest score ever recorded.
    pub fn max(&self) -> Option<i64> {
        self.scores.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = ScoreHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.most_recent(), None);
        assert_eq!(history.iterate(10).count(), 0);
    }

    #[test]
    fn iterate_returns_most_recent_first() {
        let mut history = ScoreHistory::new();
        history.prepend(10);
        history.prepend(7);
        history.prepend(15);

        assert_eq!(history.most_recent(), Some(15));
        assert_eq!(history.iterate(2).collect::<Vec<_>>(), vec![15, 7]);
        assert_eq!(history.iterate(usize::MAX).collect::<Vec<_>>(), vec![15, 7, 10]);
    }

    #[test]
    fn iterate_is_restartable() {
        let mut history = ScoreHistory::new();
        history.prepend(1);
        history.prepend(2);

        let first: Vec<_> = history.iterate(1).collect();
        let second: Vec<_> = history.iterate(1).collect();
        assert_eq!(first, second);
        assert_eq!(history.iterate(0).count(), 0);
    }

    #[test]
    fn max_tracks_highest_score() {
        let mut history = ScoreHistory::new();
        history.prepend(-4);
        history.prepend(-9);
        assert_eq!(history.max(), Some(-4));
        assert_eq!(history.len(), 2);
    }
}
