//! The opponent model: what the adversary did, and what tends to follow.
pub mod context;
pub use context::*;

pub mod distribution;
pub use distribution::*;

pub mod history;
pub use history::*;

pub mod predictor;
pub use predictor::*;

pub mod table;
pub use table::*;
