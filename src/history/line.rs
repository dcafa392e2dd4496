use super::action::Act;
use super::action::Event;

/// street/section markers emitted by the exporter between betting rounds.
/// anything at or past the flop ends the preflop section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    HoleCards,
    Flop,
    Turn,
    River,
    Showdown,
    Summary,
}

impl Marker {
    pub fn is_postflop(&self) -> bool {
        !matches!(self, Marker::HoleCards)
    }
}

/// one classified line of hand-history text. the parser walks a block as a
/// state machine over these variants instead of nesting string matches.
///
/// `Chatter` is noise the exporter is known to emit (hole card deals, table
/// talk, connection notices); `Other` is anything we cannot classify at all
/// and is what the soft-warning path reports on.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Header { id: u64 },
    Table { size: usize, button: usize },
    Seat { number: usize, name: String, stack: f64 },
    Action(Event),
    Section(Marker),
    Chatter,
    Other,
}

impl Line {
    pub const HAND_START: &'static str = "PokerStars Hand #";

    fn header(line: &str) -> Option<Self> {
        let rest = line.strip_prefix(Self::HAND_START)?;
        let digits = rest.split(':').next()?;
        let id = digits.parse::<u64>().ok()?;
        Some(Self::Header { id })
    }

    /// Table 'Aurora III' 6-max Seat #3 is the button
    fn table(line: &str) -> Option<Self> {
        let rest = line.strip_prefix("Table '")?;
        let close = rest.rfind('\'')?;
        let rest = rest[close + 1..].trim_start();
        let (size, rest) = rest.split_once("-max")?;
        let size = size.parse::<usize>().ok()?;
        let rest = rest.trim_start().strip_prefix("Seat #")?;
        let button = rest.strip_suffix(" is the button")?;
        let button = button.parse::<usize>().ok()?;
        Some(Self::Table { size, button })
    }

    /// Seat 3: villain99 ($25.50 in chips)
    /// Seat 5: short stack ($4 in chips) is sitting out
    fn seat(line: &str) -> Option<Self> {
        let rest = line.strip_prefix("Seat ")?;
        let (number, rest) = rest.split_once(": ")?;
        let number = number.parse::<usize>().ok()?;
        let cut = rest.rfind(" in chips)")?;
        let open = rest[..cut].rfind('(')?;
        let name = rest[..open].trim_end();
        let stack = rest[open + 1..cut].trim_start_matches('$');
        let stack = stack.parse::<f64>().ok()?;
        match name.is_empty() {
            true => None,
            false => Some(Self::Seat {
                number,
                name: name.to_string(),
                stack,
            }),
        }
    }

    /// villain99: raises $0.20 to $0.30
    ///
    /// player names may themselves contain ": ", so every split point is
    /// tried until the remainder opens with a recognized verb.
    fn action(line: &str) -> Option<Self> {
        for (at, _) in line.match_indices(": ") {
            let name = &line[..at];
            let rest = &line[at + 2..];
            let verb = rest.split_whitespace().next()?;
            if let Ok(act) = Act::try_from(verb) {
                return Some(Self::Action(Event::new(name.to_string(), act)));
            }
        }
        None
    }

    fn section(line: &str) -> Option<Self> {
        let markers = [
            ("*** HOLE CARDS ***", Marker::HoleCards),
            ("*** FLOP ***", Marker::Flop),
            ("*** TURN ***", Marker::Turn),
            ("*** RIVER ***", Marker::River),
            ("*** SHOW DOWN ***", Marker::Showdown),
            ("*** SUMMARY ***", Marker::Summary),
        ];
        markers
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, marker)| Self::Section(*marker))
    }

    fn chatter(line: &str) -> Option<Self> {
        let noise = [
            "Dealt to ",
            "Uncalled bet",
            "Total pot",
            "Board [",
            "Hole cards dealt",
        ];
        let anywhere = [
            " said, ",
            " collected ",
            " has timed out",
            " is disconnected",
            " is connected",
            " is sitting out",
            " sits out",
            " has returned",
            " joins the table",
            " leaves the table",
            " was removed from the table",
            " will be allowed to play after the button",
            " doesn't show hand",
            " shows [",
            " mucks hand",
            " finished the tournament",
        ];
        if line.is_empty()
            || noise.iter().any(|p| line.starts_with(p))
            || anywhere.iter().any(|p| line.contains(p))
        {
            Some(Self::Chatter)
        } else {
            None
        }
    }
}

/// total classification: every line of text maps to exactly one variant,
/// with `Other` as the catch-all for format drift.
impl From<&str> for Line {
    fn from(line: &str) -> Self {
        let line = line.trim_end();
        None.or_else(|| Self::header(line))
            .or_else(|| Self::section(line))
            .or_else(|| Self::table(line))
            .or_else(|| Self::seat(line))
            .or_else(|| Self::action(line))
            .or_else(|| Self::chatter(line))
            .unwrap_or(Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_header() {
        let line = "PokerStars Hand #249876543210:  Hold'em No Limit ($0.05/$0.10 USD) - 2024/05/01 12:00:00 ET";
        assert_eq!(Line::from(line), Line::Header { id: 249876543210 });
    }

    #[test]
    fn classifies_table() {
        let line = "Table 'Aurora III' 6-max Seat #3 is the button";
        assert_eq!(
            Line::from(line),
            Line::Table {
                size: 6,
                button: 3
            }
        );
    }

    #[test]
    fn table_name_may_contain_quotes() {
        let line = "Table 'Bob's Room' 2-max Seat #1 is the button";
        assert_eq!(
            Line::from(line),
            Line::Table {
                size: 2,
                button: 1
            }
        );
    }

    #[test]
    fn classifies_seat() {
        let line = "Seat 3: villain99 ($25.50 in chips)";
        assert_eq!(
            Line::from(line),
            Line::Seat {
                number: 3,
                name: "villain99".to_string(),
                stack: 25.50,
            }
        );
    }

    #[test]
    fn classifies_sitting_out_seat() {
        let line = "Seat 5: short stack ($4 in chips) is sitting out";
        assert_eq!(
            Line::from(line),
            Line::Seat {
                number: 5,
                name: "short stack".to_string(),
                stack: 4.0,
            }
        );
    }

    #[test]
    fn classifies_actions() {
        assert_eq!(
            Line::from("hero: posts small blind $0.05"),
            Line::Action(Event::new("hero".to_string(), Act::Blind))
        );
        assert_eq!(
            Line::from("villain99: raises $0.20 to $0.30"),
            Line::Action(Event::new("villain99".to_string(), Act::Raise))
        );
        assert_eq!(
            Line::from("hero: folds"),
            Line::Action(Event::new("hero".to_string(), Act::Fold))
        );
    }

    #[test]
    fn player_name_with_colon_space() {
        let line = "mr: big: calls $0.10";
        assert_eq!(
            Line::from(line),
            Line::Action(Event::new("mr: big".to_string(), Act::Call))
        );
    }

    #[test]
    fn classifies_sections() {
        assert_eq!(
            Line::from("*** HOLE CARDS ***"),
            Line::Section(Marker::HoleCards)
        );
        assert_eq!(
            Line::from("*** FLOP *** [2h 9s Kd]"),
            Line::Section(Marker::Flop)
        );
        assert_eq!(
            Line::from("*** SUMMARY ***"),
            Line::Section(Marker::Summary)
        );
    }

    #[test]
    fn known_noise_is_chatter() {
        assert_eq!(Line::from("Dealt to hero [Ah Kd]"), Line::Chatter);
        assert_eq!(
            Line::from("Uncalled bet ($0.20) returned to villain99"),
            Line::Chatter
        );
        assert_eq!(Line::from("villain99 is disconnected"), Line::Chatter);
        assert_eq!(Line::from(""), Line::Chatter);
    }

    #[test]
    fn drift_falls_through_to_other() {
        assert_eq!(Line::from("hero: antes $0.01"), Line::Other);
        assert_eq!(Line::from("some future exporter line"), Line::Other);
    }
}
