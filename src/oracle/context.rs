use crate::gameplay::Move;
use crate::gameplay::MoveError;

/// An ordered window of the adversary's most recent moves.
///
/// Contexts key the frequency table. Two contexts are equal iff they hold
/// the same moves in the same order; ordering is lexicographic, so shorter
/// prefixes sort first.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Context(Vec<Move>);

impl Context {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
}

impl From<Vec<Move>> for Context {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}
impl From<&[Move]> for Context {
    fn from(moves: &[Move]) -> Self {
        Self(moves.to_vec())
    }
}

/// space-separated tokens, oldest first
impl TryFrom<&str> for Context {
    type Error = MoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Move::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(Move::token)
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
