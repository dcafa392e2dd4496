use super::aggregate::Aggregate;
use crate::Count;
use crate::Rate;
use serde::Serialize;

/// the dashboard-facing view: raw hand count plus rates recomputed from
/// the persisted counters. VPIP and PFR are rates over hands played; the
/// 3-bet rate is over 3-bet opportunities, which is why the aggregate
/// carries that denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sheet {
    pub hands: Count,
    pub vpip_pct: Rate,
    pub pfr_pct: Rate,
    pub three_bet_pct: Rate,
}

impl Sheet {
    /// percentage to one decimal place, zero when the denominator is empty.
    fn percent(numerator: Count, denominator: Count) -> Rate {
        match denominator {
            0 => 0.0,
            d => (numerator as Rate / d as Rate * 1000.).round() / 10.,
        }
    }
}

impl From<&Aggregate> for Sheet {
    fn from(aggregate: &Aggregate) -> Self {
        Self {
            hands: aggregate.hands,
            vpip_pct: Self::percent(aggregate.vpip, aggregate.hands),
            pfr_pct: Self::percent(aggregate.pfr, aggregate.hands),
            three_bet_pct: Self::percent(aggregate.three_bets, aggregate.three_bet_chances),
        }
    }
}

impl Display for Sheet {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{:>6} hands  {} {:>5.1}  {} {:>5.1}  {} {:>5.1}",
            self.hands,
            "VPIP".yellow(),
            self.vpip_pct,
            "PFR".green(),
            self.pfr_pct,
            "3BET".magenta(),
            self.three_bet_pct,
        )
    }
}

use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
