use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{
    BranchSpec, CareerSpec, CategoryCode, OptionSpec, ProgrammeSpec, QuestionSpec, Section,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(range(min = 1))]
    pub question_id: i64,

    #[validate(range(min = 1))]
    pub option_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordProgressRequest {
    #[validate(range(min = 0))]
    pub current_question_index: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,

    pub section: Section,
    pub category: CategoryCode,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,

    #[validate(length(min = 1), nested)]
    pub options: Vec<CreateOptionRequest>,
}

#[derive(Debug, Clone, serde::Serialize, Deserialize, Validate)]
pub struct CreateOptionRequest {
    #[validate(length(min = 1, max = 500))]
    pub text: String,

    #[validate(range(min = 1, max = 5))]
    pub weight: i32,

    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCareerRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(length(min = 1, max = 100))]
    pub stream: String,

    #[validate(length(min = 1))]
    pub required_codes: Vec<CategoryCode>,

    pub typical_degree: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBranchRequest {
    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub description: Option<String>,
    pub broad_work_area: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgrammeRequest {
    pub branch_id: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub stream: String,

    #[validate(length(min = 1, max = 50))]
    pub degree_type: String,

    #[validate(length(min = 1, max = 300))]
    pub full_name: String,

    #[validate(range(min = 1, max = 10))]
    pub duration_years: i32,

    pub short_description: Option<String>,
    pub eligibility_12th_stream: Option<String>,

    #[serde(default)]
    pub key_tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl From<CreateQuestionRequest> for QuestionSpec {
    fn from(req: CreateQuestionRequest) -> Self {
        QuestionSpec {
            text: req.text,
            section: req.section,
            category: req.category,
            is_active: req.is_active,
            display_order: req.display_order,
            options: req.options.into_iter().map(OptionSpec::from).collect(),
        }
    }
}

impl From<CreateOptionRequest> for OptionSpec {
    fn from(req: CreateOptionRequest) -> Self {
        OptionSpec {
            text: req.text,
            weight: req.weight,
            display_order: req.display_order,
        }
    }
}

impl From<CreateCareerRequest> for CareerSpec {
    fn from(req: CreateCareerRequest) -> Self {
        CareerSpec {
            title: req.title,
            description: req.description,
            stream: req.stream,
            required_codes: req.required_codes,
            typical_degree: req.typical_degree,
        }
    }
}

impl From<CreateBranchRequest> for BranchSpec {
    fn from(req: CreateBranchRequest) -> Self {
        BranchSpec {
            slug: req.slug,
            name: req.name,
            description: req.description,
            broad_work_area: req.broad_work_area,
        }
    }
}

impl From<CreateProgrammeRequest> for ProgrammeSpec {
    fn from(req: CreateProgrammeRequest) -> Self {
        ProgrammeSpec {
            branch_id: req.branch_id,
            stream: req.stream,
            degree_type: req.degree_type,
            full_name: req.full_name,
            duration_years: req.duration_years,
            short_description: req.short_description,
            eligibility_12th_stream: req.eligibility_12th_stream,
            key_tags: req.key_tags,
        }
    }
}
