/// table position derived from the button seat. labels follow the usual
/// shorthand; tables larger than six seats fall back to numbered early
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Button,
    Small,
    Big,
    UnderTheGun,
    Hijack,
    Cutoff,
    Early(usize),
}

impl Position {
    /// position labels in acting order from the button, for the number of
    /// players actually dealt in. heads-up has no small blind seat; the
    /// button posts it.
    pub fn layout(players: usize) -> Vec<Self> {
        use Position::*;
        match players {
            0 | 1 => vec![],
            2 => vec![Button, Big],
            3 => vec![Button, Small, Big],
            4 => vec![Button, Small, Big, Cutoff],
            5 => vec![Button, Small, Big, UnderTheGun, Cutoff],
            6 => vec![Button, Small, Big, UnderTheGun, Hijack, Cutoff],
            n => std::iter::empty()
                .chain([Button, Small, Big])
                .chain((0..n - 3).map(Early))
                .collect(),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Button => write!(f, "BTN"),
            Self::Small => write!(f, "SB"),
            Self::Big => write!(f, "BB"),
            Self::UnderTheGun => write!(f, "UTG"),
            Self::Hijack => write!(f, "HJ"),
            Self::Cutoff => write!(f, "CO"),
            Self::Early(i) => write!(f, "EP{}", i),
        }
    }
}

/// one dealt-in player: the name is the aggregation join key. the starting
/// stack is parsed for completeness but unused by the core counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub number: usize,
    pub name: String,
    pub stack: f64,
    pub position: Position,
}

impl Seat {
    /// assign positions by rotating the occupied seat numbers so the
    /// button comes first. seats must already be in seat-number order and
    /// must contain the button.
    pub fn rotate(seats: &mut [Seat], button: usize) {
        let pivot = seats
            .iter()
            .position(|s| s.number == button)
            .expect("button seat present");
        let labels = Position::layout(seats.len());
        let count = seats.len();
        for (i, label) in labels.into_iter().enumerate() {
            seats[(pivot + i) % count].position = label;
        }
    }
}
