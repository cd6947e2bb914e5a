use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::Answer,
    repositories::sequence,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert-or-update keyed on (assessment, question): a resubmission for
    /// the same question overwrites the chosen option, never duplicates the
    /// row. Returns the resulting answer.
    async fn upsert(
        &self,
        assessment_id: i64,
        question_id: i64,
        option_id: i64,
    ) -> AppResult<Answer>;

    async fn list_for_assessment(&self, assessment_id: i64) -> AppResult<Vec<Answer>>;
}

pub struct MongoAnswerRepository {
    db: Database,
    collection: Collection<Answer>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("answers");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "assessment_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("assessment_question_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(pair_index).await?;
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn upsert(
        &self,
        assessment_id: i64,
        question_id: i64,
        option_id: i64,
    ) -> AppResult<Answer> {
        let filter = doc! { "assessment_id": assessment_id, "question_id": question_id };

        if let Some(mut existing) = self.collection.find_one(filter.clone()).await? {
            self.collection
                .update_one(filter, doc! { "$set": { "option_id": option_id } })
                .await?;
            existing.option_id = option_id;
            return Ok(existing);
        }

        let answer = Answer {
            id: sequence::next_id(&self.db, "answers").await?,
            assessment_id,
            question_id,
            option_id,
        };
        self.collection.insert_one(&answer).await?;
        Ok(answer)
    }

    async fn list_for_assessment(&self, assessment_id: i64) -> AppResult<Vec<Answer>> {
        let answers = self
            .collection
            .find(doc! { "assessment_id": assessment_id })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }
}
