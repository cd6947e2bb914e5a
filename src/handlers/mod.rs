pub mod assessment_handler;
pub mod catalog_handler;
pub mod question_handler;

pub use assessment_handler::{
    complete_assessment, get_assessment, list_assessments, record_answer, record_progress,
    start_assessment,
};
pub use catalog_handler::{
    create_branch, create_career, create_programme, delete_career, health_check, list_branches,
    list_careers, list_programmes, seed_reference_data, update_career,
};
pub use question_handler::{create_question, delete_question, list_questions, update_question};
