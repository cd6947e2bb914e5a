use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Assessment,
    repositories::sequence,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persists a new in-progress assessment with the given frozen question
    /// selection and a cursor at index 0.
    async fn create(&self, user_id: i64, selected_question_ids: Vec<i64>)
        -> AppResult<Assessment>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Assessment>>;

    /// The user's assessments, most recently started first.
    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Assessment>>;

    async fn update_current_index(&self, id: i64, index: i64) -> AppResult<Assessment>;

    /// Marks the assessment completed, freezing the scores and stamping the
    /// completion time.
    async fn set_completed(
        &self,
        id: i64,
        scores: BTreeMap<String, i64>,
    ) -> AppResult<Assessment>;
}

pub struct MongoAssessmentRepository {
    db: Database,
    collection: Collection<Assessment>,
}

impl MongoAssessmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("assessments");
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

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_index).await?;
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for MongoAssessmentRepository {
    async fn create(
        &self,
        user_id: i64,
        selected_question_ids: Vec<i64>,
    ) -> AppResult<Assessment> {
        let id = sequence::next_id(&self.db, "assessments").await?;
        let assessment = Assessment::new(id, user_id, selected_question_ids);
        self.collection.insert_one(&assessment).await?;
        Ok(assessment)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Assessment>> {
        let assessment = self.collection.find_one(doc! { "id": id }).await?;
        Ok(assessment)
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Assessment>> {
        let assessments = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "started_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(assessments)
    }

    async fn update_current_index(&self, id: i64, index: i64) -> AppResult<Assessment> {
        self.collection
            .find_one_and_update(
                doc! { "id": id },
                doc! { "$set": { "current_question_index": index } },
            )
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment with id '{}' not found", id)))
    }

    async fn set_completed(
        &self,
        id: i64,
        scores: BTreeMap<String, i64>,
    ) -> AppResult<Assessment> {
        let scores = to_bson(&scores)?;
        let completed_at = to_bson(&Utc::now())?;

        self.collection
            .find_one_and_update(
                doc! { "id": id },
                doc! { "$set": {
                    "status": "completed",
                    "completed_at": completed_at,
                    "scores": scores,
                } },
            )
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment with id '{}' not found", id)))
    }
}
