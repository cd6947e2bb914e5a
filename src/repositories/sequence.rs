use mongodb::{
    bson::{doc, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
};

/// Allocates the next value of a named id sequence from the `counters`
/// collection. Rows carry serial integer ids rather than ObjectIds, so
/// every Mongo repository draws its ids from here.
pub(crate) async fn next_id(db: &Database, sequence: &str) -> AppResult<i64> {
    let counters: Collection<Document> = db.get_collection("counters");

    let updated = counters
        .find_one_and_update(
            doc! { "_id": sequence },
            doc! { "$inc": { "seq": 1_i64 } },
        )
        .upsert(true)
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Counter '{}' missing after upsert", sequence))
        })?;

    updated
        .get_i64("seq")
        .map_err(|e| AppError::InternalError(format!("Counter '{}' is malformed: {}", sequence, e)))
}
