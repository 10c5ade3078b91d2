use std::fmt::{self, Debug, Display};

/// The two dice of the current turn, as rolled by the game service.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    die1: u8,
    die2: u8,
}

impl Dice {
    /// Returns `None` unless both values are between 1 and 6.
    pub fn from_numbers(die1: u8, die2: u8) -> Option<Self> {
        let valid = |die: u8| (1..=6).contains(&die);
        (valid(die1) && valid(die2)).then_some(Dice { die1, die2 })
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// The distances this roll allows, a double counts four times.
    pub fn moves(&self) -> impl Iterator<Item = u8> + use<> {
        let repeats = if self.is_double() { 3 } else { 0 };
        std::iter::once(self.die1)
            .chain(std::iter::repeat_n(self.die1, repeats))
            .chain((!self.is_double()).then_some(self.die2))
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.die1, self.die2)
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_double() {
            write!(f, "Double({})", self.die1)
        } else {
            write!(f, "Dice({} | {})", self.die1, self.die2)
        }
    }
}
