use crate::state::MatchState;

/// Append-only log of match snapshots.
///
/// The log is never empty: the oldest retained snapshot (`floor`) is kept
/// apart from the undoable tail, so there is always a current state and undo
/// can never remove the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchHistory {
    floor: MatchState,
    tail: Vec<MatchState>,
}

impl MatchHistory {
    pub fn new(initial: MatchState) -> Self {
        Self {
            floor: initial,
            tail: Vec::new(),
        }
    }

    /// Latest snapshot.
    pub fn current(&self) -> &MatchState {
        self.tail.last().unwrap_or(&self.floor)
    }

    /// Oldest retained snapshot; undo stops here.
    pub fn floor(&self) -> &MatchState {
        &self.floor
    }

    pub fn push(&mut self, state: MatchState) {
        self.tail.push(state);
    }

    /// Drops the latest snapshot. Returns false (and does nothing) at the floor.
    pub fn undo(&mut self) -> bool {
        self.tail.pop().is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.tail.is_empty()
    }

    /// Number of snapshots, floor included.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// A history always holds its floor snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MatchState> {
        core::iter::once(&self.floor).chain(self.tail.iter())
    }

    /// Discards the oldest snapshots so at most `limit` remain (minimum 1).
    ///
    /// The oldest survivor becomes the new floor. Returns how many snapshots
    /// were dropped.
    pub fn retain_recent(&mut self, limit: usize) -> usize {
        let limit = limit.max(1);
        let len = self.len();
        if len <= limit {
            return 0;
        }

        let excess = len - limit;
        if let Some(new_floor) = self.tail.drain(..excess).last() {
            self.floor = new_floor;
        }
        excess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::state::PerTeam;

    fn snapshot(games_a: u32) -> MatchState {
        let mut state = MatchState::new(&MatchConfig::default());
        state.games = PerTeam::new(games_a, 0);
        state
    }

    fn games(history: &MatchHistory) -> Vec<u32> {
        history.iter().map(|s| s.games.a).collect()
    }

    #[test]
    fn undo_stops_at_the_floor() {
        let mut history = MatchHistory::new(snapshot(0));
        history.push(snapshot(1));

        assert_eq!(history.len(), 2);
        assert!(history.undo());
        assert_eq!(history.current(), &snapshot(0));
        assert!(!history.undo());
        assert!(!history.can_undo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn retain_recent_moves_the_floor_forward() {
        let mut history = MatchHistory::new(snapshot(0));
        for games_a in 1..=5 {
            history.push(snapshot(games_a));
        }

        assert_eq!(history.retain_recent(3), 3);
        assert_eq!(games(&history), vec![3, 4, 5]);
        assert_eq!(history.floor(), &snapshot(3));

        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current(), &snapshot(3));
    }

    #[test]
    fn retain_recent_keeps_at_least_one_snapshot() {
        let mut history = MatchHistory::new(snapshot(0));
        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(history.retain_recent(0), 2);
        assert_eq!(games(&history), vec![2]);
        assert_eq!(history.retain_recent(10), 0);
    }
}
