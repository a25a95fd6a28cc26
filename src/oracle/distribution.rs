use crate::Count;
use crate::gameplay::Move;
use std::collections::BTreeMap;

/// How often each move followed one particular context.
///
/// A move that never followed is untracked (`get` returns `None`),
/// which is distinct from a tracked move with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution(BTreeMap<Move, Count>);

impl Distribution {
    pub fn get(&self, m: &Move) -> Option<Count> {
        self.0.get(m).copied()
    }
    pub fn increment(&mut self, m: Move) {
        let count = self.0.entry(m).or_insert(0);
        *count = count.saturating_add(1);
    }
    pub fn set(&mut self, m: Move, count: Count) {
        self.0.insert(m, count);
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Saturates at `Count::MAX`.
    pub fn total(&self) -> Count {
        self.0.values().fold(0, |sum, n| sum.saturating_add(*n))
    }
    /// Tracked moves in rock, paper, scissors order.
    pub fn iter(&self) -> impl Iterator<Item = (&Move, &Count)> {
        self.0.iter()
    }
    /// Most frequent move. Ties go to the earliest of rock, paper, scissors.
    pub fn argmax(&self) -> Option<Move> {
        self.0
            .iter()
            .fold(None, |best: Option<(Move, Count)>, (&m, &count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((m, count)),
            })
            .map(|(m, _)| m)
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|(m, count)| format!("{}: {}", m, count))
                .collect::<Vec<_>>()
                .join("  ")
        )
    }
}
