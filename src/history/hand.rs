use super::action::Event;
use super::blocks::Blocks;
use super::line::Line;
use super::line::Marker;
use super::seat::Position;
use super::seat::Seat;

/// reasons a block cannot be attributed safely. any of these abort the
/// hand; the run continues with the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MissingHeader,
    DoubledHeader,
    MissingTable,
    EmptySeats,
    DoubledSeat(usize),
    PhantomButton(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "no parseable hand id in header"),
            Self::DoubledHeader => write!(f, "two headers in one block"),
            Self::MissingTable => write!(f, "no table line, cannot place the button"),
            Self::EmptySeats => write!(f, "no parseable seat lines"),
            Self::DoubledSeat(n) => write!(f, "seat {} listed twice", n),
            Self::PhantomButton(n) => write!(f, "button on unoccupied seat {}", n),
        }
    }
}

impl std::error::Error for ParseError {}

/// parsing phases over classified lines. blind posts land before the hole
/// card marker, so the setup phase collects actions too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup,
    Preflop,
}

/// one fully parsed cash-game hand: header metadata, the dealt-in seats in
/// seat-number order with assigned positions, and the preflop action
/// sequence in line order. postflop streets are out of scope and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    id: u64,
    size: usize,
    button: usize,
    seats: Vec<Seat>,
    events: Vec<Event>,
}

impl Hand {
    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn seated(&self, name: &str) -> bool {
        self.seats.iter().any(|s| s.name == name)
    }

    /// parse every hand in one file's contents, pairing each failure with
    /// nothing but a debug log line. failure isolation is per block.
    pub fn all(text: &str) -> (Vec<Hand>, usize) {
        let mut malformed = 0;
        let hands = Blocks::from(text)
            .filter_map(|block| match Hand::try_from(block) {
                Ok(hand) => Some(hand),
                Err(e) => {
                    log::debug!("skipping malformed hand: {}", e);
                    malformed += 1;
                    None
                }
            })
            .collect();
        (hands, malformed)
    }
}

impl TryFrom<&str> for Hand {
    type Error = ParseError;
    fn try_from(block: &str) -> Result<Self, Self::Error> {
        let mut id = None;
        let mut table = None;
        let mut seats = Vec::new();
        let mut events = Vec::new();
        let mut phase = Phase::Setup;
        for line in block.lines() {
            match Line::from(line) {
                Line::Header { id: found } => match id {
                    None => id = Some(found),
                    Some(_) => return Err(ParseError::DoubledHeader),
                },
                Line::Table { size, button } => table = Some((size, button)),
                Line::Seat {
                    number,
                    name,
                    stack,
                } => seats.push(Seat {
                    number,
                    name,
                    stack,
                    position: Position::Button, // placeholder until rotation
                }),
                Line::Action(event) => events.push(event),
                Line::Section(Marker::HoleCards) => phase = Phase::Preflop,
                Line::Section(marker) if marker.is_postflop() => break,
                Line::Section(_) => {}
                Line::Chatter => {}
                Line::Other => match phase {
                    Phase::Preflop => log::warn!("unrecognized action line: {:?}", line),
                    Phase::Setup => log::debug!("unrecognized setup line: {:?}", line),
                },
            }
        }
        let id = id.ok_or(ParseError::MissingHeader)?;
        let (size, button) = table.ok_or(ParseError::MissingTable)?;
        if seats.is_empty() {
            return Err(ParseError::EmptySeats);
        }
        seats.sort_by_key(|s: &Seat| s.number);
        if let Some(pair) = seats.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(ParseError::DoubledSeat(pair[0].number));
        }
        if !seats.iter().any(|s| s.number == button) {
            return Err(ParseError::PhantomButton(button));
        }
        Seat::rotate(&mut seats, button);
        Ok(Self {
            id,
            size,
            button,
            seats,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::action::Act;
    use crate::history::seat::Position;

    const HAND: &str = "\
PokerStars Hand #249876543210:  Hold'em No Limit ($0.05/$0.10 USD) - 2024/05/01 12:00:00 ET
Table 'Aurora III' 6-max Seat #1 is the button
Seat 1: alice ($10.00 in chips)
Seat 2: bob ($9.85 in chips)
Seat 3: carol ($25.50 in chips)
alice: posts small blind $0.05
bob: posts big blind $0.10
*** HOLE CARDS ***
Dealt to carol [Ah Kd]
carol: raises $0.20 to $0.30
alice: folds
bob: calls $0.20
*** FLOP *** [2h 9s Kc]
bob: checks
carol: bets $0.45
*** SUMMARY ***
";

    #[test]
    fn parses_header_and_table() {
        let hand = Hand::try_from(HAND).unwrap();
        assert_eq!(hand.id(), 249876543210);
        assert_eq!(hand.size(), 6);
        assert_eq!(hand.button(), 1);
    }

    #[test]
    fn parses_seats_in_order_with_positions() {
        let hand = Hand::try_from(HAND).unwrap();
        let seats = hand.seats();
        assert_eq!(seats.len(), 3);
        assert_eq!(seats[0].name, "alice");
        assert_eq!(seats[0].position, Position::Button);
        assert_eq!(seats[1].position, Position::Small);
        assert_eq!(seats[2].position, Position::Big);
    }

    #[test]
    fn preflop_stops_at_flop_marker() {
        let hand = Hand::try_from(HAND).unwrap();
        let acts = hand.events().iter().map(|e| e.act()).collect::<Vec<_>>();
        assert_eq!(
            acts,
            vec![Act::Blind, Act::Blind, Act::Raise, Act::Fold, Act::Call]
        );
    }

    #[test]
    fn unrecognized_preflop_line_is_soft_skipped() {
        let drifted = HAND.replace("alice: folds", "alice: antes $0.01");
        let hand = Hand::try_from(drifted.as_str()).unwrap();
        assert_eq!(hand.events().len(), 4);
    }

    #[test]
    fn missing_header_aborts() {
        let block = "Table 'X' 2-max Seat #1 is the button\nSeat 1: a ($1 in chips)\n";
        assert_eq!(Hand::try_from(block), Err(ParseError::MissingHeader));
    }

    #[test]
    fn doubled_header_aborts() {
        let block = "PokerStars Hand #7: x\nPokerStars Hand #8: y\n";
        assert_eq!(Hand::try_from(block), Err(ParseError::DoubledHeader));
    }

    #[test]
    fn missing_table_aborts() {
        let block = "PokerStars Hand #7: x\nSeat 1: a ($1 in chips)\n";
        assert_eq!(Hand::try_from(block), Err(ParseError::MissingTable));
    }

    #[test]
    fn button_must_be_seated() {
        let block = "\
PokerStars Hand #7: x
Table 'X' 6-max Seat #4 is the button
Seat 1: a ($1 in chips)
Seat 2: b ($1 in chips)
";
        assert_eq!(Hand::try_from(block), Err(ParseError::PhantomButton(4)));
    }

    #[test]
    fn doubled_seat_aborts() {
        let block = "\
PokerStars Hand #7: x
Table 'X' 6-max Seat #1 is the button
Seat 1: a ($1 in chips)
Seat 1: b ($1 in chips)
";
        assert_eq!(Hand::try_from(block), Err(ParseError::DoubledSeat(1)));
    }

    #[test]
    fn all_counts_malformed_blocks() {
        let text = format!(
            "{}PokerStars Hand #300: trunc\n{}",
            HAND,
            HAND.replace("249876543210", "249876543211")
        );
        let (hands, malformed) = Hand::all(&text);
        assert_eq!(hands.len(), 2);
        assert_eq!(malformed, 1);
    }
}
