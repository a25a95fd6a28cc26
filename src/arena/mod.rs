//! Best-of match between two players.
//!
//! Each round both players commit a move, the result is announced, and only
//! then are both players told what was thrown. Ties do not count towards
//! the score.
use crate::WINS;
use crate::gameplay::Move;
use crate::gameplay::Outcome;
use crate::players::Player;
use colored::Colorize;

pub struct Arena {
    players: [Box<dyn Player>; 2],
    score: [usize; 2],
    wins: usize,
    rounds: Option<usize>,
    played: usize,
    verbosity: u8,
}

impl Arena {
    pub fn new(left: Box<dyn Player>, right: Box<dyn Player>) -> Self {
        Self {
            players: [left, right],
            score: [0, 0],
            wins: WINS,
            rounds: None,
            played: 0,
            verbosity: 1,
        }
    }
    /// Round wins needed to take the match.
    pub fn wins(mut self, wins: usize) -> Self {
        self.wins = wins.max(1);
        self
    }
    /// Stop after this many rounds even without a winner.
    pub fn rounds(mut self, rounds: Option<usize>) -> Self {
        self.rounds = rounds;
        self
    }
    /// 0 prints one line per round, anything higher prints the verdict too.
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
    pub fn score(&self) -> [usize; 2] {
        self.score
    }
    pub fn played(&self) -> usize {
        self.played
    }
    pub fn name(&self, seat: usize) -> String {
        self.players[seat].name()
    }

    /// Play until someone reaches the required wins or the round cap runs
    /// out. Returns the seat of the winner, if any.
    pub fn run(&mut self) -> anyhow::Result<Option<usize>> {
        println!(
            "Best {} out of {}.  Go! {}",
            self.wins,
            self.wins.saturating_mul(2) - 1,
            "-".repeat(40)
        );
        while self.winner().is_none() && !self.exhausted() {
            println!();
            self.round()?;
        }
        let winner = self.winner();
        match winner {
            Some(seat) => println!(
                "\n{} wins the game! {}",
                self.name(seat).bold(),
                "-".repeat(40)
            ),
            None => println!("\nNo winner after {} rounds. {}", self.played, "-".repeat(40)),
        }
        log::info!(
            "match over after {} rounds: {} to {}",
            self.played,
            self.score[0],
            self.score[1]
        );
        Ok(winner)
    }

    /// One round: both commit, the outcome is announced, then both remember.
    pub fn round(&mut self) -> anyhow::Result<Outcome> {
        let a = self.players[0].play()?;
        let b = self.players[1].play()?;
        let outcome = Outcome::from((a, b));
        self.played += 1;
        self.announce(a, b, outcome);
        self.players[0].remember(a, b);
        self.players[1].remember(b, a);
        if let Some(seat) = outcome.winner() {
            self.score[seat] += 1;
            println!(
                "  The score is {} ({}) to {} ({}).",
                self.score[0],
                self.name(0),
                self.score[1],
                self.name(1)
            );
        }
        Ok(outcome)
    }

    fn winner(&self) -> Option<usize> {
        self.score.iter().position(|&s| s >= self.wins)
    }
    fn exhausted(&self) -> bool {
        self.rounds.is_some_and(|cap| self.played >= cap)
    }
    fn announce(&self, a: Move, b: Move, outcome: Outcome) {
        let (left, right) = (self.name(0), self.name(1));
        let victor = outcome.winner().map(|seat| self.name(seat).green().bold());
        match self.verbosity {
            0 => match victor {
                Some(victor) => println!(">> {}: {}, {}: {} | {} wins", left, a, right, b, victor),
                None => println!(">> {}: {}, {}: {} | tie", left, a, right, b),
            },
            _ => {
                println!(">> {}: {}", left, a);
                println!(">> {}: {}", right, b);
                println!("\n  {}.", Move::verdict(a, b).yellow());
                if let Some(victor) = victor {
                    println!("  {} wins.", victor);
                }
            }
        }
    }
}
