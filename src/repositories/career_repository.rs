use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Career, CareerSpec},
    repositories::sequence,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// Full career catalog in insertion order.
    async fn list(&self) -> AppResult<Vec<Career>>;

    async fn create(&self, spec: CareerSpec) -> AppResult<Career>;
    async fn update(&self, id: i64, spec: CareerSpec) -> AppResult<Career>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoCareerRepository {
    db: Database,
    collection: Collection<Career>,
}

impl MongoCareerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("careers");
        Self {
            db: db.clone(),
            collection,
        }
    }

    fn career_from_spec(id: i64, spec: CareerSpec) -> Career {
        Career {
            id,
            title: spec.title,
            description: spec.description,
            stream: spec.stream,
            required_codes: spec.required_codes,
            typical_degree: spec.typical_degree,
        }
    }
}

#[async_trait]
impl CareerRepository for MongoCareerRepository {
    async fn list(&self) -> AppResult<Vec<Career>> {
        let careers = self
            .collection
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(careers)
    }

    async fn create(&self, spec: CareerSpec) -> AppResult<Career> {
        let id = sequence::next_id(&self.db, "careers").await?;
        let career = Self::career_from_spec(id, spec);
        self.collection.insert_one(&career).await?;
        Ok(career)
    }

    async fn update(&self, id: i64, spec: CareerSpec) -> AppResult<Career> {
        let career = Self::career_from_spec(id, spec);
        let result = self
            .collection
            .replace_one(doc! { "id": id }, &career)
            .await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Career with id '{}' not found",
                id
            )));
        }
        Ok(career)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Career with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
