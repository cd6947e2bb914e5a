use serde::{Deserialize, Serialize};

use crate::models::domain::question::{AnswerOption, Question};

/// One recorded choice. At most one exists per (assessment, question) pair;
/// re-submitting overwrites the option reference.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: i64,
    pub assessment_id: i64,
    pub question_id: i64,
    pub option_id: i64,
}

/// An answer joined with the question it belongs to and the option that was
/// chosen, as needed by scoring and the assessment view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerRow {
    pub answer: Answer,
    pub question: Question,
    pub option: AnswerOption,
}
