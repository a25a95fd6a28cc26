use super::history::History;
use super::table::Table;
use crate::Lookahead;
use crate::gameplay::Move;

/// Everything the adaptive player knows about its adversary.
///
/// The history holds the adversary's last `limit` moves; the table counts,
/// for every window of 1 to `limit` consecutive moves, which move came
/// next. Prediction looks up the longest window that matches the current
/// history and backs off to shorter ones only while nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oracle {
    history: History,
    table: Table,
}

impl Oracle {
    pub fn new(limit: Lookahead) -> Self {
        Self {
            history: History::new(limit),
            table: Table::default(),
        }
    }
    pub fn limit(&self) -> Lookahead {
        self.history.limit()
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    /// Raise the lookahead limit. Never shrinks.
    pub fn raise(&mut self, limit: Lookahead) {
        self.history.raise(limit);
    }

    /// The move that beats the adversary's most likely next move,
    /// or `None` when there is nothing to go on.
    ///
    /// The first (longest) matching context decides. If it is known but
    /// has no counts yet the answer is `None`, even when a shorter context
    /// would have data.
    pub fn predict(&self) -> Option<Move> {
        let depth = self.limit().min(self.history.len());
        (1..=depth)
            .rev()
            .filter_map(|i| self.history.last(i).ok())
            .find_map(|context| self.table.lookup(&context).map(|d| (context, d)))
            .inspect(|(context, distribution)| {
                log::debug!("matched [{}] -> {}", context, distribution)
            })
            .and_then(|(_, distribution)| distribution.argmax())
            .map(|expected| expected.counter())
    }

    /// Record the adversary's move for a finished round.
    ///
    /// Every window ending at the current history is credited with
    /// `observed` before `observed` itself joins the history.
    pub fn remember(&mut self, observed: Move) {
        let depth = self.limit().min(self.history.len());
        for context in (1..=depth).filter_map(|i| self.history.last(i).ok()) {
            self.table.increment(context, observed);
        }
        self.history.push(observed);
    }
}

impl From<(History, Table)> for Oracle {
    fn from((history, table): (History, Table)) -> Self {
        Self { history, table }
    }
}
