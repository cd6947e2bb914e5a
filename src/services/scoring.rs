use std::collections::BTreeMap;

use crate::models::domain::{AnswerRow, Career, CategoryCode, Section};

/// Accumulated option weights per category.
pub type ScoreMap = BTreeMap<CategoryCode, i64>;

/// Sums option weights into per-category buckets. All 12 categories are
/// present in the result, so an unanswered category scores 0 rather than
/// going missing. Rows whose question category disagrees with its section
/// contribute to no bucket.
pub fn compute_scores(rows: &[AnswerRow]) -> ScoreMap {
    let mut scores: ScoreMap = CategoryCode::ALL.iter().map(|c| (*c, 0)).collect();

    for row in rows {
        if let Some(category) = row.question.scoring_category() {
            if let Some(bucket) = scores.get_mut(&category) {
                *bucket += i64::from(row.option.weight);
            }
        }
    }

    scores
}

/// The `count` highest-scoring RIASEC interest codes. Equal scores break
/// alphabetically by code so the result is reproducible.
pub fn top_riasec_codes(scores: &ScoreMap, count: usize) -> Vec<CategoryCode> {
    let mut riasec: Vec<(CategoryCode, i64)> = scores
        .iter()
        .filter(|(code, _)| code.section() == Section::Interest)
        .map(|(code, score)| (*code, *score))
        .collect();

    riasec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    riasec.into_iter().take(count).map(|(code, _)| code).collect()
}

/// Careers whose required codes overlap the top interest codes, kept in
/// catalog order. Any overlap qualifies; full containment is not required.
pub fn match_careers(careers: Vec<Career>, top_codes: &[CategoryCode]) -> Vec<Career> {
    careers
        .into_iter()
        .filter(|career| career.matches_any(top_codes))
        .collect()
}

/// Score map as persisted on the assessment row, keyed by code string.
pub fn to_score_doc(scores: &ScoreMap) -> BTreeMap<String, i64> {
    scores
        .iter()
        .map(|(code, score)| (code.as_str().to_string(), *score))
        .collect()
}

/// Reads a persisted score map back into typed form. Unknown keys are
/// dropped; categories absent from the document score 0.
pub fn from_score_doc(doc: &BTreeMap<String, i64>) -> ScoreMap {
    CategoryCode::ALL
        .iter()
        .map(|code| (*code, doc.get(code.as_str()).copied().unwrap_or(0)))
        .collect()
}
