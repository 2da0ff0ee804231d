use std::fmt;

use super::constants::{MAX_FACE, MIN_FACE, NUM_DICE};
use super::errors::{GameError, GameResult};

/// A single die face, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DieValue(u8);

impl DieValue {
    pub const ONE: DieValue = DieValue(1);

    pub fn new(face: u8) -> GameResult<Self> {
        if (MIN_FACE..=MAX_FACE).contains(&face) {
            Ok(DieValue(face))
        } else {
            Err(GameError::InvalidDieValue(face))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in the hand, always within 0..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieIndex(usize);

impl DieIndex {
    pub const ALL: [DieIndex; NUM_DICE] = [DieIndex(0), DieIndex(1), DieIndex(2), DieIndex(3), DieIndex(4)];

    pub fn new(index: usize) -> GameResult<Self> {
        if index < NUM_DICE {
            Ok(DieIndex(index))
        } else {
            Err(GameError::InvalidHoldIndex(index))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Five dice. Position matters because it pairs with [`Held`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([DieValue; NUM_DICE]);

impl Hand {
    /// Builds a hand from raw faces, rejecting anything outside 1..=6.
    pub fn new(faces: [u8; NUM_DICE]) -> GameResult<Self> {
        let mut dice = [DieValue::ONE; NUM_DICE];
        for (slot, face) in dice.iter_mut().zip(faces) {
            *slot = DieValue::new(face)?;
        }
        Ok(Hand(dice))
    }

    pub fn from_dice(dice: [DieValue; NUM_DICE]) -> Self {
        Hand(dice)
    }

    pub fn dice(&self) -> &[DieValue; NUM_DICE] {
        &self.0
    }

    pub fn die(&self, index: DieIndex) -> DieValue {
        self.0[index.get()]
    }

    pub fn faces(&self) -> [u8; NUM_DICE] {
        self.0.map(DieValue::get)
    }

    /// Face counts indexed by face value; slot 0 is unused.
    pub fn counts(&self) -> [u8; MAX_FACE as usize + 1] {
        let mut counts = [0u8; MAX_FACE as usize + 1];
        for die in self.0 {
            counts[die.get() as usize] += 1;
        }
        counts
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|d| u32::from(d.get())).sum()
    }

    /// The shared face when all five dice match.
    pub fn five_of_a_kind(&self) -> Option<DieValue> {
        let first = self.0[0];
        self.0.iter().all(|d| *d == first).then_some(first)
    }

    /// Sorted distinct faces.
    pub fn distinct_faces(&self) -> Vec<u8> {
        let mut faces = self.faces().to_vec();
        faces.sort_unstable();
        faces.dedup();
        faces
    }
}

impl Default for Hand {
    fn default() -> Self {
        Hand([DieValue::ONE; NUM_DICE])
    }
}

impl TryFrom<&[u8]> for Hand {
    type Error = GameError;

    fn try_from(faces: &[u8]) -> GameResult<Self> {
        let faces: [u8; NUM_DICE] = faces.try_into().map_err(|_| GameError::WrongHandSize {
            expected: NUM_DICE,
            actual: faces.len(),
        })?;
        Hand::new(faces)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let faces: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", faces.join(" "))
    }
}

/// Per-position hold flags; `true` keeps the die out of the next roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Held([bool; NUM_DICE]);

impl Held {
    pub fn is_held(&self, index: DieIndex) -> bool {
        self.0[index.get()]
    }

    pub fn toggle(&mut self, index: DieIndex) {
        self.0[index.get()] = !self.0[index.get()];
    }

    pub fn flags(&self) -> &[bool; NUM_DICE] {
        &self.0
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|h| *h)
    }
}
