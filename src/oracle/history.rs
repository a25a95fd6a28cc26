use super::context::Context;
use crate::Lookahead;
use crate::gameplay::Move;
use std::collections::VecDeque;

/// Asked for a window the history cannot fill.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("requested the last {requested} moves but only {available} are recorded")]
    OutOfRange { requested: usize, available: usize },
}

/// Bounded record of the adversary's most recent moves, oldest first.
///
/// Never holds more than `limit` moves; pushing past capacity evicts
/// from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    limit: Lookahead,
    moves: VecDeque<Move>,
}

impl History {
    pub fn new(limit: Lookahead) -> Self {
        Self {
            limit,
            moves: VecDeque::new(),
        }
    }
    pub fn limit(&self) -> Lookahead {
        self.limit
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
    pub fn push(&mut self, m: Move) {
        self.moves.push_back(m);
        while self.moves.len() > self.limit {
            self.moves.pop_front();
        }
    }
    /// The most recent `n` moves in chronological order.
    /// `n` must be in `1..=len`.
    pub fn last(&self, n: usize) -> Result<Context, HistoryError> {
        if n == 0 || n > self.len() {
            return Err(HistoryError::OutOfRange {
                requested: n,
                available: self.len(),
            });
        }
        Ok(self.moves.range(self.len() - n..).copied().collect::<Vec<_>>().into())
    }
    /// Grow capacity to `limit`. Capacity never shrinks.
    pub fn raise(&mut self, limit: Lookahead) {
        self.limit = self.limit.max(limit);
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.moves
                .iter()
                .map(Move::token)
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
