use serde::{Deserialize, Serialize};

/// Grouping for engineering programmes, e.g. "Core Engineering" branches.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineeringBranch {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broad_work_area: Option<String>,
}

/// A degree programme surfaced alongside career recommendations. Programmes
/// are read-only reference data from the assessment flow's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Programme {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    pub stream: String,
    pub degree_type: String,
    pub full_name: String,
    pub duration_years: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_12th_stream: Option<String>,
    pub key_tags: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct BranchSpec {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub broad_work_area: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ProgrammeSpec {
    pub branch_id: Option<i64>,
    pub stream: String,
    pub degree_type: String,
    pub full_name: String,
    pub duration_years: i32,
    pub short_description: Option<String>,
    pub eligibility_12th_stream: Option<String>,
    pub key_tags: Vec<String>,
}
