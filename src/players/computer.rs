use super::Player;
use crate::Arbitrary;
use crate::Lookahead;
use crate::gameplay::Move;
use crate::oracle::Oracle;
use crate::save::Store;

/// Adaptive player that counters the opponent's most likely next move.
///
/// The oracle is reloaded from the store at the start of every call and
/// discarded at the end, so whatever is in the store is the only state.
/// After each round the opponent's move is recorded and saved right away.
pub struct Computer<S: Store> {
    id: usize,
    limit: Lookahead,
    store: S,
}

impl<S: Store> Computer<S> {
    pub fn new(store: S, limit: Lookahead) -> Self {
        Self {
            id: super::enlist(),
            limit,
            store,
        }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    /// Configured lookahead, raised to whatever the store has persisted.
    pub fn limit(&self) -> Lookahead {
        self.limit
    }
    fn load(&mut self) -> Oracle {
        let oracle = self.store.load(self.limit);
        if oracle.limit() > self.limit {
            log::info!("lookahead raised from {} to {}", self.limit, oracle.limit());
            self.limit = oracle.limit();
        }
        oracle
    }
}

impl<S: Store> Player for Computer<S> {
    fn play(&mut self) -> anyhow::Result<Move> {
        match self.load().predict() {
            Some(m) => {
                log::debug!("{} counters with {}", self.name(), m);
                Ok(m)
            }
            None => {
                let m = Move::random();
                log::debug!("{} has no prediction, throws {}", self.name(), m);
                Ok(m)
            }
        }
    }
    fn remember(&mut self, _: Move, theirs: Move) {
        let mut oracle = self.load();
        oracle.remember(theirs);
        if let Err(e) = self.store.save(&oracle) {
            log::warn!("{} failed to save what it learned: {:#}", self.name(), e);
        }
    }
    fn name(&self) -> String {
        format!("CPU #{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;

    #[test]
    fn learns_through_the_store() {
        let mut cpu = Computer::new(Memory::default(), 3);
        for _ in 0..3 {
            cpu.remember(Move::Paper, Move::Rock);
        }
        let oracle = cpu.store().load(3);
        assert_eq!(oracle.history().len(), 3);
        assert_eq!(oracle.predict(), Some(Move::Paper));
        assert_eq!(cpu.play().unwrap(), Move::Paper);
    }

    #[test]
    fn shares_knowledge_across_sessions() {
        let memory = Memory::default();
        let mut first = Computer::new(memory, 2);
        for _ in 0..4 {
            first.remember(Move::Rock, Move::Scissors);
        }
        let text = first.store().text().unwrap();
        let mut second = Computer::new(Memory::from(text.as_str()), 2);
        assert_eq!(second.play().unwrap(), Move::Rock);
    }

    #[test]
    fn adopts_persisted_lookahead() {
        let mut oracle = Oracle::new(5);
        oracle.remember(Move::Rock);
        let memory = Memory::from(oracle.encode().as_str());
        let mut cpu = Computer::new(memory, 2);
        assert_eq!(cpu.limit(), 2);
        cpu.play().unwrap();
        assert_eq!(cpu.limit(), 5);
    }

    #[test]
    fn names_are_numbered() {
        let a = Computer::new(Memory::default(), 1);
        let b = Computer::new(Memory::default(), 1);
        assert!(a.name().starts_with("CPU #"));
        assert_ne!(a.name(), b.name());
    }
}
