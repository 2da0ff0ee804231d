use std::fmt;

use super::constants::NUM_CATEGORIES;
use super::dice::DieValue;

/// The thirteen scoring boxes, in canonical cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ones = 0,
    Twos = 1,
    Threes = 2,
    Fours = 3,
    Fives = 4,
    Sixes = 5,
    ThreeOfAKind = 6,
    FourOfAKind = 7,
    FullHouse = 8,
    SmallStraight = 9,
    LargeStraight = 10,
    Chance = 11,
    Yahtzee = 12,
}

/// Direction of a cursor move through [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Category {
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Chance,
        Category::Yahtzee,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Chance,
        Category::Yahtzee,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Face value counted by an upper-section box.
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// The upper-section box that counts `die`.
    pub fn upper_for(die: DieValue) -> Category {
        Category::UPPER[usize::from(die.get() - 1)]
    }

    /// Neighbour in canonical order, wrapping at both ends.
    pub fn step(self, direction: Direction) -> Category {
        let i = self.index();
        let next = match direction {
            Direction::Next => (i + 1) % NUM_CATEGORIES,
            Direction::Prev => (i + NUM_CATEGORIES - 1) % NUM_CATEGORIES,
        };
        Category::ALL[next]
    }

    /// Short label as printed on the LCD.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "1",
            Category::Twos => "2",
            Category::Threes => "3",
            Category::Fours => "4",
            Category::Fives => "5",
            Category::Sixes => "6",
            Category::ThreeOfAKind => "3ofK",
            Category::FourOfAKind => "4ofK",
            Category::FullHouse => "FULL",
            Category::SmallStraight => "S-STR",
            Category::LargeStraight => "L-STR",
            Category::Chance => "CHNC",
            Category::Yahtzee => "YHTZ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ONES",
            Category::Twos => "TWOS",
            Category::Threes => "THREES",
            Category::Fours => "FOURS",
            Category::Fives => "FIVES",
            Category::Sixes => "SIXES",
            Category::ThreeOfAKind => "3 OF A KIND",
            Category::FourOfAKind => "4 OF A KIND",
            Category::FullHouse => "FULL HOUSE",
            Category::SmallStraight => "SM. STRAIGHT",
            Category::LargeStraight => "LG. STRAIGHT",
            Category::Chance => "CHANCE",
            Category::Yahtzee => "YAHTZEE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
