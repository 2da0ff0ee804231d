//! Dice generation
//!
//! The engine never rolls dice itself. This roller produces the final hand
//! for a `RollDice` action and the throwaway frames shown while the dice
//! tumble.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::models::constants::{
    MAX_FACE, MIN_FACE, ROLL_ANIMATION_DELAY_GROWTH_PCT, ROLL_ANIMATION_START_DELAY_MS,
};
use crate::models::dice::{DieIndex, DieValue, Hand, Held};

pub struct DiceRoller {
    rng: StdRng,
}

impl DiceRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Re-rolls every unheld position uniformly in 1..=6; held dice keep their face.
    pub fn roll(&mut self, hand: &Hand, held: &Held) -> Hand {
        let mut dice = *hand.dice();
        for index in DieIndex::ALL {
            if !held.is_held(index) {
                dice[index.get()] = self.die();
            }
        }
        Hand::from_dice(dice)
    }

    /// Display-only intermediate hands for the tumbling effect.
    pub fn animation_frames(&mut self, hand: &Hand, held: &Held, frames: usize) -> Vec<Hand> {
        (0..frames).map(|_| self.roll(hand, held)).collect()
    }

    fn die(&mut self) -> DieValue {
        let face = self.rng.gen_range(MIN_FACE..=MAX_FACE);
        // gen_range stays within 1..=6
        DieValue::new(face).unwrap_or(DieValue::ONE)
    }
}

/// Pause after each animation frame: 40 ms, growing by 15% (floored) each step.
pub fn frame_delays(frames: usize) -> Vec<Duration> {
    let mut delay = ROLL_ANIMATION_START_DELAY_MS;
    let mut delays = Vec::with_capacity(frames);
    for _ in 0..frames {
        delays.push(Duration::from_millis(delay));
        delay = delay * ROLL_ANIMATION_DELAY_GROWTH_PCT / 100;
    }
    delays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rolls() {
        let hand = Hand::default();
        let held = Held::default();
        let mut a = DiceRoller::new(7);
        let mut b = DiceRoller::new(7);
        for _ in 0..20 {
            assert_eq!(a.roll(&hand, &held), b.roll(&hand, &held));
        }
    }

    #[test]
    fn held_dice_never_change() {
        let hand = Hand::new([6, 1, 6, 1, 6]).unwrap();
        let mut held = Held::default();
        held.toggle(DieIndex::new(0).unwrap());
        held.toggle(DieIndex::new(2).unwrap());

        let mut roller = DiceRoller::new(99);
        for _ in 0..200 {
            let rolled = roller.roll(&hand, &held);
            assert_eq!(rolled.faces()[0], 6);
            assert_eq!(rolled.faces()[2], 6);
        }
    }

    #[test]
    fn all_faces_show_up() {
        let mut roller = DiceRoller::new(3);
        let mut seen = [false; 7];
        for _ in 0..200 {
            for face in roller.roll(&Hand::default(), &Held::default()).faces() {
                seen[face as usize] = true;
            }
        }
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn animation_has_requested_frames() {
        let mut roller = DiceRoller::new(1);
        assert_eq!(roller.animation_frames(&Hand::default(), &Held::default(), 10).len(), 10);
        assert!(roller.animation_frames(&Hand::default(), &Held::default(), 0).is_empty());
    }

    #[test]
    fn delays_grow() {
        let delays = frame_delays(4);
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(40),
                Duration::from_millis(46),
                Duration::from_millis(52),
                Duration::from_millis(59),
            ]
        );
    }
}
