use super::moves::Move;

/// Result of a single round from the left player's point of view.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
    /// Index of the round winner in a `[left, right]` pair.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Win => Some(0),
            Outcome::Loss => Some(1),
            Outcome::Tie => None,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((left, right): (Move, Move)) -> Self {
        if left.beats(&right) {
            Outcome::Win
        } else if right.beats(&left) {
            Outcome::Loss
        } else {
            Outcome::Tie
        }
    }
}
