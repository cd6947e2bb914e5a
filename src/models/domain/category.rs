use serde::{Deserialize, Serialize};

/// Top-level questionnaire grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Interest,
    Aptitude,
    Personality,
}

/// The dimension a question measures: one of the six RIASEC interest codes,
/// or an aptitude/personality subcategory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryCode {
    R,
    I,
    A,
    S,
    E,
    C,
    Logical,
    Numerical,
    Verbal,
    Leadership,
    Teamwork,
    Discipline,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 12] = [
        CategoryCode::R,
        CategoryCode::I,
        CategoryCode::A,
        CategoryCode::S,
        CategoryCode::E,
        CategoryCode::C,
        CategoryCode::Logical,
        CategoryCode::Numerical,
        CategoryCode::Verbal,
        CategoryCode::Leadership,
        CategoryCode::Teamwork,
        CategoryCode::Discipline,
    ];

    pub fn section(self) -> Section {
        match self {
            CategoryCode::R
            | CategoryCode::I
            | CategoryCode::A
            | CategoryCode::S
            | CategoryCode::E
            | CategoryCode::C => Section::Interest,
            CategoryCode::Logical | CategoryCode::Numerical | CategoryCode::Verbal => {
                Section::Aptitude
            }
            CategoryCode::Leadership | CategoryCode::Teamwork | CategoryCode::Discipline => {
                Section::Personality
            }
        }
    }

    /// Number of questions drawn from this category into one assessment.
    /// The quotas sum to the fixed assessment size of 40.
    pub fn quota(self) -> usize {
        match self {
            CategoryCode::R
            | CategoryCode::I
            | CategoryCode::A
            | CategoryCode::S
            | CategoryCode::E
            | CategoryCode::C => 4,
            CategoryCode::Logical | CategoryCode::Numerical => 3,
            CategoryCode::Verbal => 2,
            CategoryCode::Leadership | CategoryCode::Teamwork => 3,
            CategoryCode::Discipline => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryCode::R => "R",
            CategoryCode::I => "I",
            CategoryCode::A => "A",
            CategoryCode::S => "S",
            CategoryCode::E => "E",
            CategoryCode::C => "C",
            CategoryCode::Logical => "LOGICAL",
            CategoryCode::Numerical => "NUMERICAL",
            CategoryCode::Verbal => "VERBAL",
            CategoryCode::Leadership => "LEADERSHIP",
            CategoryCode::Teamwork => "TEAMWORK",
            CategoryCode::Discipline => "DISCIPLINE",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        CategoryCode::ALL.into_iter().find(|c| c.as_str() == code)
    }
}
