use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    InProgress,
    Completed,
}

/// One questionnaire instance for one user. The selected question list is
/// frozen at creation; the index is a resumable cursor the client moves in
/// both directions; scores are written once, on completion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Assessment {
    pub id: i64,
    pub user_id: i64,
    pub status: AssessmentStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub selected_question_ids: Vec<i64>,
    pub current_question_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, i64>>,
}

impl Assessment {
    pub fn new(id: i64, user_id: i64, selected_question_ids: Vec<i64>) -> Self {
        Assessment {
            id,
            user_id,
            status: AssessmentStatus::InProgress,
            started_at: Utc::now(),
            completed_at: None,
            selected_question_ids,
            current_question_index: 0,
            scores: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }
}
