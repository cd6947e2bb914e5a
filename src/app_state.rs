use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAnswerRepository, MongoAssessmentRepository, MongoCareerRepository,
        MongoProgrammeRepository, MongoQuestionRepository,
    },
    services::{AssessmentService, CatalogService},
};

#[derive(Clone)]
pub struct AppState {
    pub assessment_service: Arc<AssessmentService>,
    pub catalog_service: Arc<CatalogService>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let assessment_repository = Arc::new(MongoAssessmentRepository::new(&db));
        assessment_repository.ensure_indexes().await?;

        let answer_repository = Arc::new(MongoAnswerRepository::new(&db));
        answer_repository.ensure_indexes().await?;

        let career_repository = Arc::new(MongoCareerRepository::new(&db));
        let programme_repository = Arc::new(MongoProgrammeRepository::new(&db));

        let assessment_service = Arc::new(AssessmentService::new(
            assessment_repository,
            answer_repository,
            question_repository.clone(),
            career_repository.clone(),
            StdRng::from_entropy(),
        ));

        let catalog_service = Arc::new(CatalogService::new(
            question_repository,
            career_repository,
            programme_repository,
        ));

        Ok(Self {
            assessment_service,
            catalog_service,
            config: Arc::new(config),
            db,
        })
    }
}
