//! Adaptive rock-paper-scissors opponent model.
//!
//! The computer player watches its adversary's moves, counts which move
//! tends to follow each recent window of moves, and throws the counter to
//! the most likely continuation. What it learns is written to a small text
//! file after every round so it survives across runs.
//!
//! ## Modules
//!
//! - [`gameplay`]: Moves, dominance rules, round outcomes
//! - [`oracle`]: History buffer, frequency table, backoff predictor
//! - [`save`]: Text codec and the stores that own load/save
//! - [`players`]: Human, adaptive, stubborn and random players
//! - [`arena`]: Best-of match driver
pub mod arena;
pub mod gameplay;
pub mod oracle;
pub mod players;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of times a move followed a context.
pub type Count = u64;
/// Maximum context length and history capacity.
pub type Lookahead = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for fallbacks and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ORACLE PARAMETERS
// ============================================================================
/// Default lookahead limit when none is configured or persisted.
pub const LOOKAHEAD: Lookahead = 4;
/// Largest lookahead limit a database or the command line may ask for.
pub const MAX_LOOKAHEAD: Lookahead = 64;
/// Default location of the persisted database, relative to the working directory.
pub const DATABASE: &str = ".roshambo";
/// First line of every persisted database.
pub const MAGIC: &str = "roshambo-oracle";
/// Line closing each context block in the persisted database.
pub const TERMINATOR: &str = "*";

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Round wins needed to take a match (best 5 out of 9).
pub const WINS: usize = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the game prompt stays readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
