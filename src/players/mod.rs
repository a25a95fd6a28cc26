//! Players that can sit at either side of an [`Arena`](crate::arena::Arena).
//!
//! ## Implementations
//!
//! - [`Computer`]: Adaptive player backed by an [`Oracle`](crate::oracle::Oracle) in a store
//! - [`Stubborn`]: Throws the same move every round, chosen by its id
//! - [`Fish`]: Uniform random player for testing and simulation
//! - [`Human`]: Interactive terminal player (requires `cli` feature)
mod computer;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod stubborn;

pub use computer::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use stubborn::*;

use crate::gameplay::Move;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// The capability set every participant shares.
pub trait Player {
    /// Commit to a move for the current round.
    fn play(&mut self) -> anyhow::Result<Move>;
    /// Told what both sides threw, only after the round is over so that
    /// nobody can see the other move before committing its own.
    fn remember(&mut self, _mine: Move, _theirs: Move) {}
    fn name(&self) -> String;
}

/// Process-wide numbering for computer players, starting at 1.
static CPUS: AtomicUsize = AtomicUsize::new(0);

fn enlist() -> usize {
    CPUS.fetch_add(1, Ordering::Relaxed) + 1
}
