pub mod answer_repository;
pub mod assessment_repository;
pub mod career_repository;
pub mod programme_repository;
pub mod question_repository;
mod sequence;

pub use answer_repository::{AnswerRepository, MongoAnswerRepository};
pub use assessment_repository::{AssessmentRepository, MongoAssessmentRepository};
pub use career_repository::{CareerRepository, MongoCareerRepository};
pub use programme_repository::{MongoProgrammeRepository, ProgrammeRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};

#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
#[cfg(test)]
pub use assessment_repository::MockAssessmentRepository;
#[cfg(test)]
pub use career_repository::MockCareerRepository;
#[cfg(test)]
pub use programme_repository::MockProgrammeRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
