use serde::Serialize;

use crate::models::domain::{
    AnswerRow, Assessment, Career, EngineeringBranch, Programme, Question,
};

/// A freshly created assessment with its selected questions resolved, in the
/// frozen presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct StartedAssessment {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub questions: Vec<Question>,
}

/// Full state of one assessment for the owning user: the frozen question
/// list plus every answer recorded so far.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub questions: Vec<Question>,
    pub answers: Vec<AnswerRow>,
}

/// Result of completing an assessment: the frozen scores and the careers
/// matching the top interest codes.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub assessment: Assessment,
    pub recommendations: Vec<Career>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgrammeView {
    #[serde(flatten)]
    pub programme: Programme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<EngineeringBranch>,
}
