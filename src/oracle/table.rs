use super::context::Context;
use super::distribution::Distribution;
use crate::gameplay::Move;
use std::collections::BTreeMap;

/// Frequency table from contexts to what followed them.
///
/// A context that is present with an empty distribution is known but
/// unresolved. That is different from an absent context, and the
/// predictor treats the two differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table(BTreeMap<Context, Distribution>);

impl Table {
    /// Count one more observation of `next` right after `context`.
    pub fn increment(&mut self, context: Context, next: Move) {
        self.insert(context).increment(next);
    }
    pub fn lookup(&self, context: &Context) -> Option<&Distribution> {
        self.0.get(context)
    }
    /// Distribution for `context`, created empty if absent.
    pub fn insert(&mut self, context: Context) -> &mut Distribution {
        self.0.entry(context).or_default()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Contexts in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Context, &Distribution)> {
        self.0.iter()
    }
}
