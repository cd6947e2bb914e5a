use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{AnswerOption, Question, QuestionSpec},
    repositories::sequence,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Active catalog questions with options, in display order.
    async fn list_active(&self) -> AppResult<Vec<Question>>;

    /// Questions for the given ids, ordered per the input order. Unknown ids
    /// are skipped.
    async fn list_by_ids(&self, ids: Vec<i64>) -> AppResult<Vec<Question>>;

    async fn create(&self, spec: QuestionSpec) -> AppResult<Question>;
    async fn update(&self, id: i64, spec: QuestionSpec) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }

    async fn build_question(&self, id: i64, spec: QuestionSpec) -> AppResult<Question> {
        let mut options = Vec::with_capacity(spec.options.len());
        for option in spec.options {
            options.push(AnswerOption {
                id: sequence::next_id(&self.db, "options").await?,
                text: option.text,
                weight: option.weight,
                display_order: option.display_order,
            });
        }

        Ok(Question {
            id,
            text: spec.text,
            section: spec.section,
            category: spec.category,
            is_active: spec.is_active,
            display_order: spec.display_order,
            options,
            created_at: Some(Utc::now()),
        })
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn list_active(&self) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "is_active": true })
            .sort(doc! { "display_order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn list_by_ids(&self, ids: Vec<i64>) -> AppResult<Vec<Question>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let found: Vec<Question> = self
            .collection
            .find(doc! { "id": { "$in": ids.clone() } })
            .await?
            .try_collect()
            .await?;

        let mut by_id: HashMap<i64, Question> =
            found.into_iter().map(|q| (q.id, q)).collect();

        Ok(ids.into_iter().filter_map(|id| by_id.remove(&id)).collect())
    }

    async fn create(&self, spec: QuestionSpec) -> AppResult<Question> {
        let id = sequence::next_id(&self.db, "questions").await?;
        let question = self.build_question(id, spec).await?;
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn update(&self, id: i64, spec: QuestionSpec) -> AppResult<Question> {
        let existing = self.collection.find_one(doc! { "id": id }).await?;
        if existing.is_none() {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        // Options are replaced wholesale, receiving fresh ids.
        let question = self.build_question(id, spec).await?;
        self.collection
            .replace_one(doc! { "id": id }, &question)
            .await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
