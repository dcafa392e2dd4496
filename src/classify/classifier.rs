use super::outcome::Outcome;
use crate::history::Act;
use crate::history::Hand;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// accumulator for the preflop fold. the raise counter starts at 1 to
/// stand for the forced blinds already in front: the first voluntary raise
/// takes it to 2 (the open), the second to 3 (the 3-bet).
struct Tally {
    raises: usize,
    acted: BTreeSet<String>,
    outcomes: BTreeMap<String, Outcome>,
}

impl Tally {
    const BLINDS: usize = 1;

    fn new(hand: &Hand) -> Self {
        Self {
            raises: Self::BLINDS,
            acted: BTreeSet::new(),
            outcomes: hand
                .seats()
                .iter()
                .map(|seat| (seat.name.clone(), Outcome::default()))
                .collect(),
        }
    }

    fn observe(mut self, player: &str, act: Act) -> Self {
        if !act.is_decision() {
            return self;
        }
        let Some(outcome) = self.outcomes.get_mut(player) else {
            log::warn!("action by unseated player {:?}, skipping", player);
            return self;
        };
        let first = self.acted.insert(player.to_string());
        if first && act != Act::Fold && self.raises == 2 {
            outcome.three_bet_chance = true;
        }
        match act {
            Act::Call => outcome.vpip = true,
            Act::Raise => {
                outcome.vpip = true;
                outcome.pfr = true;
                self.raises += 1;
                if self.raises == 3 {
                    // whoever makes the second voluntary raise necessarily
                    // faced exactly one, even on a limp-re-raise line where
                    // they had already acted once.
                    outcome.three_bet = true;
                    outcome.three_bet_chance = true;
                }
            }
            Act::Check | Act::Fold | Act::Blind => {}
        }
        self
    }
}

/// one outcome per seated player, derived from the hand's preflop action
/// stream by an explicit fold over events in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification(BTreeMap<String, Outcome>);

impl From<&Hand> for Classification {
    fn from(hand: &Hand) -> Self {
        Self(
            hand.events()
                .iter()
                .fold(Tally::new(hand), |tally, event| {
                    tally.observe(event.player(), event.act())
                })
                .outcomes,
        )
    }
}

impl Classification {
    pub fn outcome(&self, player: &str) -> Option<&Outcome> {
        self.0.get(player)
    }
    pub fn outcomes(&self) -> impl Iterator<Item = (&String, &Outcome)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
