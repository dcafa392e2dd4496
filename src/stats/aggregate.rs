use crate::classify::Outcome;
use crate::Count;
use serde::Deserialize;
use serde::Serialize;

/// running per-player counters, one record per player name. counters only
/// ever grow, and each carries its own opportunity denominator so rates
/// can be recomputed from persisted state alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub hands: Count,
    pub vpip: Count,
    pub pfr: Count,
    pub three_bets: Count,
    pub three_bet_chances: Count,
}

impl Aggregate {
    /// merge exactly one per-hand outcome. summation, so merging is
    /// associative and order-independent across hands.
    pub fn absorb(&mut self, outcome: &Outcome) {
        self.hands += 1;
        self.vpip += outcome.vpip as Count;
        self.pfr += outcome.pfr as Count;
        self.three_bets += outcome.three_bet as Count;
        self.three_bet_chances += outcome.three_bet_chance as Count;
    }

    /// pointwise sum, used for population-level rollups.
    pub fn combine(self, other: Self) -> Self {
        Self {
            hands: self.hands + other.hands,
            vpip: self.vpip + other.vpip,
            pfr: self.pfr + other.pfr,
            three_bets: self.three_bets + other.three_bets,
            three_bet_chances: self.three_bet_chances + other.three_bet_chances,
        }
    }

    /// counter invariants from the data model.
    pub fn coherent(&self) -> bool {
        self.vpip <= self.hands
            && self.pfr <= self.hands
            && self.three_bets <= self.three_bet_chances
            && self.three_bet_chances <= self.hands
    }
}
