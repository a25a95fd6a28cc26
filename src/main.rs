//! Rock-paper-scissors against a computer that learns.
//!
//! Commands: play (default), inspect, forget.
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use roshambo::arena::Arena;
use roshambo::oracle::Oracle;
use roshambo::players::*;
use roshambo::save::Disk;
use roshambo::save::Store;
use roshambo::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where the computer keeps what it has learned.
    #[arg(long, global = true, env = "ROSHAMBO_DATABASE", default_value = DATABASE)]
    database: PathBuf,
    /// Longest run of opponent moves the computer looks back on.
    #[arg(long, global = true, env = "ROSHAMBO_LOOKAHEAD", default_value_t = LOOKAHEAD, value_parser = lookahead)]
    lookahead: Lookahead,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Play a best-of match against the computer")]
    Play(Play),
    #[command(about = "Show what the computer has learned so far", alias = "show")]
    Inspect,
    #[command(about = "Delete everything the computer has learned", alias = "reset")]
    Forget,
}

#[derive(Args)]
struct Play {
    /// Round wins needed to take the match.
    #[arg(long, default_value_t = WINS)]
    wins: usize,
    /// Give up after this many rounds.
    #[arg(long)]
    rounds: Option<usize>,
    /// Who sits across from the computer.
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,
    /// 0 for one line per round.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,
}

impl Default for Play {
    fn default() -> Self {
        Self {
            wins: WINS,
            rounds: None,
            opponent: Opponent::Human,
            verbosity: 1,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Human,
    Stubborn,
    Fish,
}

fn lookahead(s: &str) -> Result<Lookahead, String> {
    match s.parse::<Lookahead>() {
        Ok(0) => Err(String::from("lookahead must be at least 1")),
        Ok(n) if n > MAX_LOOKAHEAD => Err(format!("lookahead must be at most {}", MAX_LOOKAHEAD)),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let cli = Cli::parse();
    let disk = Disk::new(cli.database);
    log::info!("database at {}", disk.path().display());
    match cli.command.unwrap_or(Command::Play(Play::default())) {
        Command::Play(play) => self::play(disk, cli.lookahead, play),
        Command::Inspect => self::inspect(disk, cli.lookahead),
        Command::Forget => self::forget(disk),
    }
}

fn play(disk: Disk, limit: Lookahead, play: Play) -> anyhow::Result<()> {
    let opponent: Box<dyn Player> = match play.opponent {
        Opponent::Human => Box::new(Human),
        Opponent::Stubborn => Box::new(Stubborn::new()),
        Opponent::Fish => Box::new(Fish::new()),
    };
    let computer = Box::new(Computer::new(disk, limit));
    Arena::new(opponent, computer)
        .wins(play.wins)
        .rounds(play.rounds)
        .verbosity(play.verbosity)
        .run()
        .map(|_| ())
}

fn inspect(disk: Disk, limit: Lookahead) -> anyhow::Result<()> {
    if !disk.exists() {
        println!("nothing learned yet at {}", disk.path().display());
        return Ok(());
    }
    let ref oracle = disk.load(limit);
    println!("database   {}", disk.path().display());
    println!("lookahead  {}", oracle.limit());
    println!("history    {}", oracle.history());
    println!("contexts   {}", oracle.table().len());
    for (context, distribution) in oracle.table().iter() {
        println!("  {:<32} -> {}", format!("[{}]", context), distribution);
    }
    println!("prediction {}", prediction(oracle));
    Ok(())
}

fn prediction(oracle: &Oracle) -> String {
    match oracle.predict() {
        Some(m) => format!("{} (expects {})", m, m.counter().counter()),
        None => String::from("none (plays at random)"),
    }
}

fn forget(disk: Disk) -> anyhow::Result<()> {
    disk.forget()?;
    println!("forgot everything at {}", disk.path().display());
    Ok(())
}
