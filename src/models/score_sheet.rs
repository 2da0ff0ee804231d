use super::category::Category;
use super::constants::NUM_CATEGORIES;

/// Recorded score per category. `None` means the box is still open.
///
/// A box is written at most once; later writes are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSheet {
    scores: [Option<u32>; NUM_CATEGORIES],
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    pub fn is_set(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Writes `score` into an open box. Returns false if the box was already set.
    pub fn record(&mut self, category: Category, score: u32) -> bool {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(score);
        true
    }

    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.is_set(*c))
    }

    pub fn first_open(&self) -> Option<Category> {
        self.open_categories().next()
    }

    pub fn filled_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// Sum of every recorded box.
    pub fn recorded_sum(&self) -> u32 {
        self.scores.iter().flatten().sum()
    }
}
