use super::Player;
use crate::gameplay::Move;

/// Stock computer player that never changes its mind.
///
/// Throws the move at its id modulo three (rock, paper, scissors), every
/// round, and ignores what the opponent does.
#[derive(Debug)]
pub struct Stubborn {
    id: usize,
}

impl Stubborn {
    pub fn new() -> Self {
        Self {
            id: super::enlist(),
        }
    }
    pub fn throw(&self) -> Move {
        Move::from((self.id % 3) as u8)
    }
}

impl Default for Stubborn {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Stubborn {
    fn play(&mut self) -> anyhow::Result<Move> {
        Ok(self.throw())
    }
    fn name(&self) -> String {
        format!("CPU #{}", self.id)
    }
}
