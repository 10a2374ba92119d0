use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::db::Question;

/// Which questions a quiz round may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i64),
}

impl CategoryFilter {
    pub fn matches(self, question: &Question) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(category) => question.category == category,
        }
    }
}

/// Picks one question uniformly from those matching `filter` whose id is not in
/// `previous`. `None` means the quiz is exhausted.
pub fn next_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    filter: CategoryFilter,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|q| filter.matches(q) && !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).copied()
}
