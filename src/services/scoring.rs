//! Scoring rules
//!
//! Stateless functions deciding what a hand is worth in each category, how
//! the Joker re-interprets the lower section, and how the sheet totals up.

use crate::models::category::Category;
use crate::models::constants::{
    FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, NUM_DICE, SMALL_STRAIGHT_SCORE, SMALL_STRAIGHT_STEPS,
    UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_SCORE,
};
use crate::models::dice::Hand;
use crate::models::score_sheet::ScoreSheet;

/// True when `hand` is five of a kind and the Yahtzee box is already filled
/// (with 50 or with 0). Applies to the current roll only.
pub fn is_joker(hand: &Hand, sheet: &ScoreSheet) -> bool {
    hand.five_of_a_kind().is_some() && sheet.is_set(Category::Yahtzee)
}

/// The upper box a Joker must be played in, if it is still open.
pub fn forced_category(hand: &Hand, sheet: &ScoreSheet) -> Option<Category> {
    if !is_joker(hand, sheet) {
        return None;
    }
    let face = hand.five_of_a_kind()?;
    let category = Category::upper_for(face);
    (!sheet.is_set(category)).then_some(category)
}

/// Where the cursor lands when a turn enters scoring: the forced Joker box,
/// else the first open box in canonical order.
pub fn initial_selection(hand: &Hand, sheet: &ScoreSheet) -> Option<Category> {
    forced_category(hand, sheet).or_else(|| sheet.first_open())
}

/// Points `hand` is worth in `category`.
///
/// Upper boxes always count matching faces. With `joker` set, Full House and
/// both straights pay their fixed value and the n-of-a-kind boxes and Chance
/// pay the dice sum unconditionally.
pub fn score(category: Category, hand: &Hand, joker: bool) -> u32 {
    if let Some(face) = category.face() {
        return count_of(hand, face) * u32::from(face);
    }

    let counts = hand.counts();
    let sum = hand.sum();

    if joker {
        return match category {
            Category::FullHouse => FULL_HOUSE_SCORE,
            Category::SmallStraight => SMALL_STRAIGHT_SCORE,
            Category::LargeStraight => LARGE_STRAIGHT_SCORE,
            Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => sum,
            // Unreachable in play: Yahtzee is already filled whenever a Joker applies.
            Category::Yahtzee => 0,
            _ => 0,
        };
    }

    match category {
        Category::ThreeOfAKind => if_any_count(&counts, |c| c >= 3, sum),
        Category::FourOfAKind => if_any_count(&counts, |c| c >= 4, sum),
        Category::FullHouse => {
            let three = counts.contains(&3);
            let two = counts.contains(&2);
            // Five of a kind also scores as a full house.
            let five = counts.contains(&(NUM_DICE as u8));
            if (three && two) || five {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if longest_run_steps(hand) >= SMALL_STRAIGHT_STEPS {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            let faces = hand.distinct_faces();
            if faces.len() == NUM_DICE && faces[NUM_DICE - 1] == faces[0] + 4 {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Chance => sum,
        Category::Yahtzee => {
            if hand.five_of_a_kind().is_some() {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Sum of the recorded upper boxes; open boxes count as zero.
pub fn upper_total(sheet: &ScoreSheet) -> u32 {
    Category::UPPER.iter().filter_map(|c| sheet.get(*c)).sum()
}

pub fn has_upper_bonus(sheet: &ScoreSheet) -> bool {
    upper_total(sheet) >= UPPER_BONUS_THRESHOLD
}

/// All recorded boxes, plus 35 once the upper section reaches 63, plus the
/// accumulated Yahtzee bonus.
pub fn total_score(sheet: &ScoreSheet, yahtzee_bonus: u32) -> u32 {
    let upper_bonus = if has_upper_bonus(sheet) { UPPER_BONUS } else { 0 };
    sheet.recorded_sum() + upper_bonus + yahtzee_bonus
}

fn count_of(hand: &Hand, face: u8) -> u32 {
    u32::from(hand.counts()[usize::from(face)])
}

fn if_any_count(counts: &[u8], pred: impl Fn(u8) -> bool, value: u32) -> u32 {
    if counts.iter().copied().any(pred) {
        value
    } else {
        0
    }
}

/// Longest chain of +1 steps between adjacent sorted distinct faces.
/// Three steps means four consecutive values.
fn longest_run_steps(hand: &Hand) -> usize {
    let faces = hand.distinct_faces();
    let mut run = 0;
    let mut longest = 0;
    for pair in faces.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
        } else {
            run = 0;
        }
        longest = longest.max(run);
    }
    longest
}
