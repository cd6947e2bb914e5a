#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::{
        Answer, AnswerOption, AnswerRow, CategoryCode, Question,
    };

    /// Standard 5-point Likert options, weights 1 through 5, with option ids
    /// derived from the question id.
    pub fn likert_options(question_id: i64) -> Vec<AnswerOption> {
        let labels = [
            "Strongly Disagree",
            "Disagree",
            "Neutral",
            "Agree",
            "Strongly Agree",
        ];
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| AnswerOption {
                id: question_id * 100 + i as i64 + 1,
                text: label.to_string(),
                weight: i as i32 + 1,
                display_order: i as i32 + 1,
            })
            .collect()
    }

    /// An active question in the given category, section derived from it.
    pub fn question_in_category(id: i64, category: CategoryCode) -> Question {
        Question {
            id,
            text: format!("Statement {} ({})", id, category.as_str()),
            section: category.section(),
            category,
            is_active: true,
            display_order: id as i32,
            options: likert_options(id),
            created_at: Some(Utc::now()),
        }
    }

    /// A catalog with `per` questions in each of the 12 categories, ids
    /// assigned sequentially from 1.
    pub fn catalog_with_per_category(per: usize) -> Vec<Question> {
        let mut catalog = Vec::with_capacity(per * CategoryCode::ALL.len());
        let mut next_id = 1;
        for code in CategoryCode::ALL {
            for _ in 0..per {
                catalog.push(question_in_category(next_id, code));
                next_id += 1;
            }
        }
        catalog
    }

    /// A joined answer row: a question in `category` answered with the
    /// Likert option carrying `weight`.
    pub fn answer_row(question_id: i64, category: CategoryCode, weight: i32) -> AnswerRow {
        let question = question_in_category(question_id, category);
        let option = question
            .options
            .iter()
            .find(|o| o.weight == weight)
            .expect("weight should be on the 1-5 scale")
            .clone();
        let answer = Answer {
            id: question_id,
            assessment_id: 1,
            question_id,
            option_id: option.id,
        };
        AnswerRow {
            answer,
            question,
            option,
        }
    }
}
