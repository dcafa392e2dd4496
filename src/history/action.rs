#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Act {
    Blind,
    Fold,
    Call,
    Check,
    Raise,
}

impl Act {
    /// calls and raises put money in voluntarily. blind posts are forced,
    /// checks are free.
    pub fn is_voluntary(&self) -> bool {
        matches!(self, Act::Call | Act::Raise)
    }
    /// anything except a forced blind post counts as taking a decision.
    pub fn is_decision(&self) -> bool {
        !matches!(self, Act::Blind)
    }
}

/// verb isomorphism, matching the exporter's action vocabulary.
/// "posts" covers small blind, big blind, and dead blind variants.
impl TryFrom<&str> for Act {
    type Error = &'static str;
    fn try_from(verb: &str) -> std::result::Result<Self, Self::Error> {
        match verb {
            "posts" => Ok(Act::Blind),
            "folds" => Ok(Act::Fold),
            "calls" => Ok(Act::Call),
            "checks" => Ok(Act::Check),
            "raises" => Ok(Act::Raise),
            _ => Err("unrecognized action verb"),
        }
    }
}

/// one preflop decision attributed to a named player.
/// order within the hand is carried by position in [crate::history::Hand]'s
/// event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    player: String,
    act: Act,
}

impl Event {
    pub fn new(player: String, act: Act) -> Self {
        Self { player, act }
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn act(&self) -> Act {
        self.act
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.act {
            Act::Blind => write!(f, "{} {}", self.player, "BLIND".white()),
            Act::Fold => write!(f, "{} {}", self.player, "FOLD".red()),
            Act::Call => write!(f, "{} {}", self.player, "CALL".yellow()),
            Act::Check => write!(f, "{} {}", self.player, "CHECK".cyan()),
            Act::Raise => write!(f, "{} {}", self.player, "RAISE".green()),
        }
    }
}

use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
