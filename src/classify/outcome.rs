/// what one player did with one dealt hand, reduced to the flags the
/// aggregate counters need. computed once per hand per player and never
/// mutated afterwards. a player who never acted keeps every flag false but
/// still gets an outcome, since every dealt hand counts as played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// called or raised at least once. forced blind posts do not count.
    pub vpip: bool,
    /// raised at least once.
    pub pfr: bool,
    /// made the second voluntary raise of the hand.
    pub three_bet: bool,
    /// took a voluntary action while facing exactly one voluntary raise.
    pub three_bet_chance: bool,
}

impl Outcome {
    /// flag consistency: a 3-bet implies the chance to make one, and any
    /// raise implies chips in the pot.
    pub fn coherent(&self) -> bool {
        (!self.three_bet || self.three_bet_chance) && (!self.pfr || self.vpip)
    }
}
