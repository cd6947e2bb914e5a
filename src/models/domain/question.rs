use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::category::{CategoryCode, Section};

/// A catalog question with its weighted answer options embedded.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub section: Section,
    pub category: CategoryCode,
    pub is_active: bool,
    pub display_order: i32,
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub id: i64,
    pub text: String,
    pub weight: i32,
    pub display_order: i32,
}

/// Payload for creating or replacing a question; ids are assigned by the
/// repository.
#[derive(Clone, Debug)]
pub struct QuestionSpec {
    pub text: String,
    pub section: Section,
    pub category: CategoryCode,
    pub is_active: bool,
    pub display_order: i32,
    pub options: Vec<OptionSpec>,
}

#[derive(Clone, Debug)]
pub struct OptionSpec {
    pub text: String,
    pub weight: i32,
    pub display_order: i32,
}

impl Question {
    pub fn option(&self, option_id: i64) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// The category this question scores into. `None` when the stored
    /// category disagrees with the section; such questions contribute to no
    /// bucket and are skipped by both the selector and the aggregator.
    pub fn scoring_category(&self) -> Option<CategoryCode> {
        if self.category.section() == self.section {
            Some(self.category)
        } else {
            None
        }
    }
}
