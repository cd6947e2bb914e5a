use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{BranchSpec, EngineeringBranch, Programme, ProgrammeSpec},
    repositories::sequence,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgrammeRepository: Send + Sync {
    async fn list_programmes(&self) -> AppResult<Vec<Programme>>;
    async fn list_branches(&self) -> AppResult<Vec<EngineeringBranch>>;
    async fn create_branch(&self, spec: BranchSpec) -> AppResult<EngineeringBranch>;
    async fn create_programme(&self, spec: ProgrammeSpec) -> AppResult<Programme>;
}

pub struct MongoProgrammeRepository {
    db: Database,
    programmes: Collection<Programme>,
    branches: Collection<EngineeringBranch>,
}

impl MongoProgrammeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            programmes: db.get_collection("programmes"),
            branches: db.get_collection("engineering_branches"),
        }
    }
}

#[async_trait]
impl ProgrammeRepository for MongoProgrammeRepository {
    async fn list_programmes(&self) -> AppResult<Vec<Programme>> {
        let programmes = self
            .programmes
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(programmes)
    }

    async fn list_branches(&self) -> AppResult<Vec<EngineeringBranch>> {
        let branches = self
            .branches
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(branches)
    }

    async fn create_branch(&self, spec: BranchSpec) -> AppResult<EngineeringBranch> {
        let branch = EngineeringBranch {
            id: sequence::next_id(&self.db, "engineering_branches").await?,
            slug: spec.slug,
            name: spec.name,
            description: spec.description,
            broad_work_area: spec.broad_work_area,
        };
        self.branches.insert_one(&branch).await?;
        Ok(branch)
    }

    async fn create_programme(&self, spec: ProgrammeSpec) -> AppResult<Programme> {
        let programme = Programme {
            id: sequence::next_id(&self.db, "programmes").await?,
            branch_id: spec.branch_id,
            stream: spec.stream,
            degree_type: spec.degree_type,
            full_name: spec.full_name,
            duration_years: spec.duration_years,
            short_description: spec.short_description,
            eligibility_12th_stream: spec.eligibility_12th_stream,
            key_tags: spec.key_tags,
        };
        self.programmes.insert_one(&programme).await?;
        Ok(programme)
    }
}
