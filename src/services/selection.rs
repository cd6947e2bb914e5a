use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{CategoryCode, Question};

/// Fixed size of a full assessment: the sum of all per-category quotas.
pub const ASSESSMENT_SIZE: usize = 40;

/// Stratified sample over the active catalog: each of the 12 categories
/// contributes its quota, drawn uniformly without replacement, then the
/// combined list is shuffled once so category boundaries are not visible to
/// the respondent. Categories short on questions contribute what they have.
///
/// The returned order is what gets persisted on the assessment; callers must
/// never re-shuffle it.
pub fn select_assessment_questions<R: Rng + ?Sized>(
    catalog: &[Question],
    rng: &mut R,
) -> Vec<i64> {
    let mut pools: BTreeMap<CategoryCode, Vec<i64>> = BTreeMap::new();
    for question in catalog {
        if !question.is_active {
            continue;
        }
        if let Some(category) = question.scoring_category() {
            pools.entry(category).or_default().push(question.id);
        }
    }

    let mut selected = Vec::with_capacity(ASSESSMENT_SIZE);
    for code in CategoryCode::ALL {
        if let Some(pool) = pools.get(&code) {
            let quota = code.quota().min(pool.len());
            selected.extend(pool.choose_multiple(rng, quota).copied());
        }
    }

    selected.shuffle(rng);
    selected
}
