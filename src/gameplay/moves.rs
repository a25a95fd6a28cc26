use crate::Arbitrary;

/// One of the three throws.
///
/// Variant order is the display order and also the tie-break priority
/// used when two moves are equally likely: rock, then paper, then scissors.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Move {
    /// Rock: breaks Scissors, covered by Paper.
    Rock = 0,
    /// Paper: covers Rock, cut by Scissors.
    Paper = 1,
    /// Scissors: cut Paper, broken by Rock.
    Scissors = 2,
}

/// A token that names none of the three moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move token {0:?} (expected rock, paper or scissors)")]
    Invalid(String),
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move that defeats this one.
    pub const fn counter(&self) -> Self {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
    /// Cyclic dominance. A move never beats itself.
    pub fn beats(&self, other: &Self) -> bool {
        other.counter() == *self
    }
    /// The sentence describing a round, independent of argument order.
    pub fn verdict(a: Self, b: Self) -> &'static str {
        match (a, b) {
            (Move::Paper, Move::Rock) | (Move::Rock, Move::Paper) => "Paper covers rock",
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Rock) => "Rock breaks scissors",
            (Move::Scissors, Move::Paper) | (Move::Paper, Move::Scissors) => "Scissors cuts paper",
            _ => "Tie",
        }
    }
    pub const fn token(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n % 3 {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// case-insensitive str parsing
impl TryFrom<&str> for Move {
    type Error = MoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(MoveError::Invalid(s.to_string())),
        }
    }
}
impl std::str::FromStr for Move {
    type Err = MoveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..3u8))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!(Move::try_from("ROCK"), Ok(Move::Rock));
        assert_eq!(Move::try_from("Paper"), Ok(Move::Paper));
        assert_eq!("sCiSsOrS".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(
            Move::try_from("nuke"),
            Err(MoveError::Invalid(String::from("nuke")))
        );
        assert!(Move::try_from("").is_err());
        assert!(Move::try_from("r").is_err());
        assert!(Move::try_from(" rock").is_err());
    }

    #[test]
    fn counter_is_cyclic() {
        assert_eq!(Move::Rock.counter(), Move::Paper);
        assert_eq!(Move::Paper.counter(), Move::Scissors);
        assert_eq!(Move::Scissors.counter(), Move::Rock);
        for m in Move::ALL {
            assert_eq!(m.counter().counter().counter(), m);
        }
    }

    #[test]
    fn counter_beats_the_move_it_counters() {
        for m in Move::ALL {
            assert!(m.counter().beats(&m));
            assert!(!m.beats(&m.counter()));
            assert!(!m.beats(&m));
        }
    }

    #[test]
    fn verdict_ignores_order() {
        assert_eq!(Move::verdict(Move::Paper, Move::Rock), "Paper covers rock");
        assert_eq!(Move::verdict(Move::Rock, Move::Paper), "Paper covers rock");
        assert_eq!(Move::verdict(Move::Scissors, Move::Rock), "Rock breaks scissors");
        assert_eq!(Move::verdict(Move::Paper, Move::Scissors), "Scissors cuts paper");
        assert_eq!(Move::verdict(Move::Rock, Move::Rock), "Tie");
    }

    #[test]
    fn bijective_u8() {
        for m in Move::ALL {
            assert_eq!(m, Move::from(u8::from(m)));
        }
    }

    #[test]
    fn display_parses_back() {
        for m in Move::ALL {
            assert_eq!(Move::try_from(m.to_string().as_str()), Ok(m));
        }
    }
}
