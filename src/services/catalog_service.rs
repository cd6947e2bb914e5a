use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{
            BranchSpec, Career, CareerSpec, EngineeringBranch, Programme, ProgrammeSpec,
            Question, QuestionSpec,
        },
        dto::response::ProgrammeView,
    },
    repositories::{CareerRepository, ProgrammeRepository, QuestionRepository},
    seed,
};

/// Counts of reference rows inserted by a seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub seeded: bool,
    pub questions: usize,
    pub branches: usize,
    pub programmes: usize,
    pub careers: usize,
}

/// Read and admin-write access to the reference catalogs: questions,
/// careers, engineering branches and degree programmes.
pub struct CatalogService {
    questions: Arc<dyn QuestionRepository>,
    careers: Arc<dyn CareerRepository>,
    programmes: Arc<dyn ProgrammeRepository>,
}

impl CatalogService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        careers: Arc<dyn CareerRepository>,
        programmes: Arc<dyn ProgrammeRepository>,
    ) -> Self {
        Self {
            questions,
            careers,
            programmes,
        }
    }

    pub async fn list_questions(&self) -> AppResult<Vec<Question>> {
        self.questions.list_active().await
    }

    pub async fn create_question(&self, spec: QuestionSpec) -> AppResult<Question> {
        Self::check_section(&spec)?;
        self.questions.create(spec).await
    }

    pub async fn update_question(&self, id: i64, spec: QuestionSpec) -> AppResult<Question> {
        Self::check_section(&spec)?;
        self.questions.update(id, spec).await
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<()> {
        self.questions.delete(id).await
    }

    pub async fn list_careers(&self) -> AppResult<Vec<Career>> {
        self.careers.list().await
    }

    pub async fn create_career(&self, spec: CareerSpec) -> AppResult<Career> {
        self.careers.create(spec).await
    }

    pub async fn update_career(&self, id: i64, spec: CareerSpec) -> AppResult<Career> {
        self.careers.update(id, spec).await
    }

    pub async fn delete_career(&self, id: i64) -> AppResult<()> {
        self.careers.delete(id).await
    }

    pub async fn list_branches(&self) -> AppResult<Vec<EngineeringBranch>> {
        self.programmes.list_branches().await
    }

    pub async fn create_branch(&self, spec: BranchSpec) -> AppResult<EngineeringBranch> {
        self.programmes.create_branch(spec).await
    }

    pub async fn create_programme(&self, spec: ProgrammeSpec) -> AppResult<Programme> {
        self.programmes.create_programme(spec).await
    }

    /// Programmes with their branch resolved. Programmes without a branch
    /// (or pointing at a deleted one) are still listed, just without it.
    pub async fn list_programmes(&self) -> AppResult<Vec<ProgrammeView>> {
        let branches = self.programmes.list_branches().await?;
        let by_id: HashMap<i64, EngineeringBranch> =
            branches.into_iter().map(|b| (b.id, b)).collect();

        let views = self
            .programmes
            .list_programmes()
            .await?
            .into_iter()
            .map(|programme| {
                let branch = programme
                    .branch_id
                    .and_then(|id| by_id.get(&id))
                    .cloned();
                ProgrammeView { programme, branch }
            })
            .collect();

        Ok(views)
    }

    /// Loads the built-in reference data. A no-op once any branch exists, so
    /// repeated calls cannot duplicate rows.
    pub async fn seed_reference_data(&self) -> AppResult<SeedSummary> {
        if !self.programmes.list_branches().await?.is_empty() {
            log::info!("Reference data already present, skipping seed");
            return Ok(SeedSummary {
                seeded: false,
                questions: 0,
                branches: 0,
                programmes: 0,
                careers: 0,
            });
        }

        let mut branch_ids: HashMap<String, i64> = HashMap::new();
        let branch_specs = seed::branch_specs();
        let branches = branch_specs.len();
        for spec in branch_specs {
            let slug = spec.slug.clone();
            let branch = self.programmes.create_branch(spec).await?;
            branch_ids.insert(slug, branch.id);
        }

        let programme_specs = seed::programme_specs(&branch_ids);
        let programmes = programme_specs.len();
        for spec in programme_specs {
            self.programmes.create_programme(spec).await?;
        }

        let career_specs = seed::career_specs();
        let careers = career_specs.len();
        for spec in career_specs {
            self.careers.create(spec).await?;
        }

        let question_specs = seed::question_specs();
        let questions = question_specs.len();
        for spec in question_specs {
            self.questions.create(spec).await?;
        }

        log::info!(
            "Seeded reference data: {} questions, {} branches, {} programmes, {} careers",
            questions,
            branches,
            programmes,
            careers
        );

        Ok(SeedSummary {
            seeded: true,
            questions,
            branches,
            programmes,
            careers,
        })
    }

    fn check_section(spec: &QuestionSpec) -> AppResult<()> {
        if spec.category.section() != spec.section {
            return Err(AppError::ValidationError(format!(
                "Category {} belongs to the {:?} section, not {:?}",
                spec.category.as_str(),
                spec.category.section(),
                spec.section
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{CategoryCode, OptionSpec, Programme, Section};
    use crate::repositories::{
        MockCareerRepository, MockProgrammeRepository, MockQuestionRepository,
    };

    fn likert_specs() -> Vec<OptionSpec> {
        (1..=5)
            .map(|w| OptionSpec {
                text: format!("Option {}", w),
                weight: w,
                display_order: w,
            })
            .collect()
    }

    #[tokio::test]
    async fn question_with_mismatched_section_is_rejected() {
        let service = CatalogService::new(
            Arc::new(MockQuestionRepository::new()),
            Arc::new(MockCareerRepository::new()),
            Arc::new(MockProgrammeRepository::new()),
        );

        let spec = QuestionSpec {
            text: "I enjoy solving logic puzzles.".to_string(),
            section: Section::Interest,
            category: CategoryCode::Logical,
            is_active: true,
            display_order: 1,
            options: likert_specs(),
        };

        let result = service.create_question(spec).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn programmes_resolve_their_branch() {
        let mut programmes = MockProgrammeRepository::new();
        programmes.expect_list_branches().returning(|| {
            Ok(vec![EngineeringBranch {
                id: 1,
                slug: "computer-science".to_string(),
                name: "Computer Science".to_string(),
                description: None,
                broad_work_area: None,
            }])
        });
        programmes.expect_list_programmes().returning(|| {
            Ok(vec![
                Programme {
                    id: 1,
                    branch_id: Some(1),
                    stream: "Engineering".to_string(),
                    degree_type: "B.Tech".to_string(),
                    full_name: "B.Tech Computer Science".to_string(),
                    duration_years: 4,
                    short_description: None,
                    eligibility_12th_stream: None,
                    key_tags: vec![],
                },
                Programme {
                    id: 2,
                    branch_id: None,
                    stream: "Science".to_string(),
                    degree_type: "B.Sc".to_string(),
                    full_name: "B.Sc Physics".to_string(),
                    duration_years: 3,
                    short_description: None,
                    eligibility_12th_stream: None,
                    key_tags: vec![],
                },
            ])
        });

        let service = CatalogService::new(
            Arc::new(MockQuestionRepository::new()),
            Arc::new(MockCareerRepository::new()),
            Arc::new(programmes),
        );

        let views = service.list_programmes().await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].branch.as_ref().unwrap().id, 1);
        assert!(views[1].branch.is_none());
    }

    #[tokio::test]
    async fn seeding_is_skipped_when_branches_exist() {
        let mut programmes = MockProgrammeRepository::new();
        programmes.expect_list_branches().returning(|| {
            Ok(vec![EngineeringBranch {
                id: 1,
                slug: "computer-science".to_string(),
                name: "Computer Science".to_string(),
                description: None,
                broad_work_area: None,
            }])
        });

        let service = CatalogService::new(
            Arc::new(MockQuestionRepository::new()),
            Arc::new(MockCareerRepository::new()),
            Arc::new(programmes),
        );

        let summary = service.seed_reference_data().await.unwrap();
        assert!(!summary.seeded);
        assert_eq!(summary.questions, 0);
    }
}
