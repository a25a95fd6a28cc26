//! Line-oriented text format for an [`Oracle`].
//!
//! ```text
//! roshambo-oracle
//! 3
//! rock rock paper
//! paper
//! rock = 2
//! *
//! rock rock
//! paper = 1
//! *
//! ```
//!
//! Header, lookahead limit, history (oldest first), then one block per
//! context: the context itself, one `<move> = <count>` line per tracked
//! move, and a terminator. A block with no count lines is a known context
//! with nothing observed after it yet.
//!
//! Decoding is best-effort. Whatever parsed cleanly before a fault is
//! kept; everything after it is treated as absent.
use crate::Count;
use crate::Lookahead;
use crate::MAGIC;
use crate::MAX_LOOKAHEAD;
use crate::TERMINATOR;
use crate::gameplay::Move;
use crate::oracle::*;

impl std::fmt::Display for Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", MAGIC)?;
        writeln!(f, "{}", self.limit())?;
        writeln!(f, "{}", self.history())?;
        for (context, distribution) in self.table().iter() {
            writeln!(f, "{}", context)?;
            for (m, count) in distribution.iter() {
                writeln!(f, "{} = {}", m, count)?;
            }
            writeln!(f, "{}", TERMINATOR)?;
        }
        Ok(())
    }
}

impl Oracle {
    /// Serialize the full state.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse a persisted database. `limit` is the configured lookahead;
    /// a larger persisted limit wins.
    pub fn decode(text: &str, limit: Lookahead) -> Self {
        let mut lines = text.lines();
        match lines.next().map(str::trim) {
            Some(MAGIC) => {}
            header => {
                log::warn!("unrecognized database header {:?}, starting fresh", header);
                return Self::new(limit);
            }
        }
        let limit = match lines.next().map(str::trim).map(str::parse::<Lookahead>) {
            Some(Ok(stored)) if stored <= MAX_LOOKAHEAD => limit.max(stored),
            Some(Ok(stored)) => {
                log::warn!("lookahead limit {} above {}, starting fresh", stored, MAX_LOOKAHEAD);
                return Self::new(limit);
            }
            _ => {
                log::warn!("unreadable lookahead limit, starting fresh");
                return Self::new(limit);
            }
        };
        let history = Self::recall(lines.next().unwrap_or_default(), limit);
        let table = Self::tabulate(&mut lines, limit);
        log::debug!(
            "decoded {} moves of history and {} contexts",
            history.len(),
            table.len()
        );
        Self::from((history, table))
    }

    /// History line. An invalid token truncates to the valid prefix.
    fn recall(line: &str, limit: Lookahead) -> History {
        let mut history = History::new(limit);
        for token in line.split_whitespace() {
            match Move::try_from(token) {
                Ok(m) => history.push(m),
                Err(e) => {
                    log::warn!("history truncated: {}", e);
                    break;
                }
            }
        }
        history
    }

    /// Context blocks until end of input or the first malformed line.
    fn tabulate<'a>(lines: &mut impl Iterator<Item = &'a str>, limit: Lookahead) -> Table {
        let mut table = Table::default();
        'blocks: while let Some(header) = lines.find(|line| !line.trim().is_empty()) {
            let context = match Context::try_from(header) {
                Ok(context) if (1..=limit).contains(&context.len()) => context,
                Ok(context) => {
                    log::warn!("context of length {} outside 1..={}", context.len(), limit);
                    break 'blocks;
                }
                Err(e) => {
                    log::warn!("malformed context {:?}: {}", header, e);
                    break 'blocks;
                }
            };
            let distribution = table.insert(context);
            loop {
                match lines.next().map(str::trim) {
                    Some(TERMINATOR) => continue 'blocks,
                    Some(line) => match Self::count(line) {
                        Some((m, count)) => distribution.set(m, count),
                        None => {
                            log::warn!("malformed count line {:?}", line);
                            break 'blocks;
                        }
                    },
                    None => {
                        log::warn!("database truncated inside a context block");
                        break 'blocks;
                    }
                }
            }
        }
        table
    }

    /// `<move> = <count>`
    fn count(line: &str) -> Option<(Move, Count)> {
        let (m, count) = line.split_once('=')?;
        let m = Move::try_from(m.trim()).ok()?;
        let count = count.trim().parse::<Count>().ok()?;
        Some((m, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn context(moves: &[Move]) -> Context {
        Context::from(moves)
    }

    fn trained(limit: Lookahead, rounds: usize) -> Oracle {
        let mut oracle = Oracle::new(limit);
        for _ in 0..rounds {
            oracle.remember(Move::random());
        }
        oracle
    }

    #[test]
    fn round_trip_preserves_state() {
        for (limit, rounds) in [(1, 0), (1, 7), (3, 2), (3, 150), (6, 400)] {
            let oracle = trained(limit, rounds);
            assert_eq!(Oracle::decode(&oracle.encode(), limit), oracle);
        }
    }

    #[test]
    fn round_trip_preserves_empty_distributions() {
        let mut table = Table::default();
        table.insert(context(&[Move::Paper, Move::Paper]));
        table.increment(context(&[Move::Paper]), Move::Rock);
        let oracle = Oracle::from((History::new(2), table));
        let decoded = Oracle::decode(&oracle.encode(), 2);
        assert_eq!(decoded, oracle);
        assert!(decoded
            .table()
            .lookup(&context(&[Move::Paper, Move::Paper]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn writes_expected_layout() {
        let mut oracle = Oracle::new(2);
        oracle.remember(Move::Rock);
        oracle.remember(Move::Paper);
        assert_eq!(
            oracle.encode(),
            "roshambo-oracle\n2\nrock paper\nrock\npaper = 1\n*\n"
        );
    }

    #[test]
    fn fresh_oracle_encodes_blank_history() {
        let text = Oracle::new(4).encode();
        assert_eq!(text, "roshambo-oracle\n4\n\n");
        assert_eq!(Oracle::decode(&text, 4), Oracle::new(4));
    }

    #[test]
    fn stored_limit_raises_configured() {
        let oracle = trained(5, 20);
        let decoded = Oracle::decode(&oracle.encode(), 2);
        assert_eq!(decoded.limit(), 5);
        assert_eq!(decoded, oracle);
    }

    #[test]
    fn configured_limit_is_never_lowered() {
        let text = "roshambo-oracle\n2\nrock\n";
        assert_eq!(Oracle::decode(text, 4).limit(), 4);
    }

    #[test]
    fn wrong_header_starts_fresh() {
        let text = "something-else\n3\nrock\nrock\npaper = 1\n*\n";
        assert_eq!(Oracle::decode(text, 3), Oracle::new(3));
        assert_eq!(Oracle::decode("", 3), Oracle::new(3));
    }

    #[test]
    fn bad_limit_starts_fresh() {
        let text = "roshambo-oracle\nmany\nrock\n";
        assert_eq!(Oracle::decode(text, 3), Oracle::new(3));
    }

    #[test]
    fn absurd_limit_starts_fresh() {
        for stored in ["18446744073709551615", "1000000000000000", "65"] {
            let text = format!("roshambo-oracle\n{}\nrock\nrock\npaper = 1\n*\n", stored);
            assert_eq!(Oracle::decode(&text, 3), Oracle::new(3));
        }
        let text = "roshambo-oracle\n64\nrock\n";
        assert_eq!(Oracle::decode(text, 3).limit(), 64);
    }

    #[test]
    fn saturated_count_survives_remember() {
        let text = "roshambo-oracle\n1\nrock\nrock\npaper = 18446744073709551615\nrock = 2\n*\n";
        let mut oracle = Oracle::decode(text, 1);
        oracle.remember(Move::Paper);
        let distribution = oracle.table().lookup(&context(&[Move::Rock])).unwrap();
        assert_eq!(distribution.get(&Move::Paper), Some(Count::MAX));
        assert_eq!(distribution.get(&Move::Rock), Some(2));
        assert_eq!(distribution.total(), Count::MAX);
        assert_eq!(distribution.argmax(), Some(Move::Paper));
    }

    #[test]
    fn bad_history_token_keeps_prefix() {
        let text = "roshambo-oracle\n3\nrock lizard paper\nrock\npaper = 2\n*\n";
        let oracle = Oracle::decode(text, 3);
        assert_eq!(
            oracle.history().iter().copied().collect::<Vec<_>>(),
            vec![Move::Rock]
        );
        assert_eq!(oracle.table().len(), 1);
        assert_eq!(oracle.predict(), Some(Move::Scissors));
    }

    #[test]
    fn overlong_history_keeps_most_recent() {
        let text = "roshambo-oracle\n2\nrock paper scissors\n";
        let oracle = Oracle::decode(text, 2);
        assert_eq!(
            oracle.history().iter().copied().collect::<Vec<_>>(),
            vec![Move::Paper, Move::Scissors]
        );
    }

    #[test]
    fn truncated_block_keeps_parsed_counts() {
        let text = "roshambo-oracle\n2\nrock\nscissors\nrock = 1\n*\nrock\npaper = 3";
        let oracle = Oracle::decode(text, 2);
        assert_eq!(oracle.table().len(), 2);
        assert_eq!(
            oracle
                .table()
                .lookup(&context(&[Move::Rock]))
                .and_then(|d| d.get(&Move::Paper)),
            Some(3)
        );
    }

    #[test]
    fn malformed_count_stops_parsing() {
        let text = "roshambo-oracle\n2\nrock\nrock\npaper = 3\nrock = lots\n*\nscissors\nrock = 1\n*\n";
        let oracle = Oracle::decode(text, 2);
        assert_eq!(oracle.table().len(), 1);
        let distribution = oracle.table().lookup(&context(&[Move::Rock])).unwrap();
        assert_eq!(distribution.get(&Move::Paper), Some(3));
        assert_eq!(distribution.get(&Move::Rock), None);
        assert!(oracle.table().lookup(&context(&[Move::Scissors])).is_none());
    }

    #[test]
    fn overlong_context_stops_parsing() {
        let text = "roshambo-oracle\n1\nrock\nrock\npaper = 1\n*\nrock rock\npaper = 1\n*\n";
        let oracle = Oracle::decode(text, 1);
        assert_eq!(oracle.table().len(), 1);
    }

    #[test]
    fn tolerates_blank_lines_between_blocks() {
        let text = "roshambo-oracle\n2\n\nrock\npaper = 1\n*\n\n\npaper\n*\n";
        let oracle = Oracle::decode(text, 2);
        assert_eq!(oracle.table().len(), 2);
        assert!(oracle.table().lookup(&context(&[Move::Paper])).unwrap().is_empty());
    }
}
