use super::aggregate::Aggregate;
use crate::classify::Outcome;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// everything persisted for one player: overall counters plus the same
/// counters split by the position they were dealt in, keyed by position
/// label. both views absorb every outcome, so the overall record is always
/// the sum of the per-position ones.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub overall: Aggregate,
    pub positions: BTreeMap<String, Aggregate>,
}

impl Profile {
    /// merge one per-hand outcome under the position it was played from.
    pub fn absorb(&mut self, position: &str, outcome: &Outcome) {
        self.overall.absorb(outcome);
        self.positions
            .entry(position.to_string())
            .or_default()
            .absorb(outcome);
    }

    /// counter invariants, overall and per position, plus the rollup
    /// identity between the two views.
    pub fn coherent(&self) -> bool {
        self.overall.coherent()
            && self.positions.values().all(Aggregate::coherent)
            && self.overall
                == self
                    .positions
                    .values()
                    .copied()
                    .fold(Aggregate::default(), Aggregate::combine)
    }
}
