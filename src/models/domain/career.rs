use serde::{Deserialize, Serialize};

use crate::models::domain::category::CategoryCode;

/// A recommendation target, tagged with the RIASEC codes it calls for.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Career {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub stream: String,
    pub required_codes: Vec<CategoryCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_degree: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CareerSpec {
    pub title: String,
    pub description: String,
    pub stream: String,
    pub required_codes: Vec<CategoryCode>,
    pub typical_degree: Option<String>,
}

impl Career {
    pub fn matches_any(&self, codes: &[CategoryCode]) -> bool {
        self.required_codes.iter().any(|c| codes.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_requires_overlap_not_containment() {
        let career = Career {
            id: 1,
            title: "Software Engineer".to_string(),
            description: "Builds apps and systems using code.".to_string(),
            stream: "Science".to_string(),
            required_codes: vec![CategoryCode::I, CategoryCode::R],
            typical_degree: Some("B.Tech/BE in CS/IT".to_string()),
        };

        assert!(career.matches_any(&[CategoryCode::R, CategoryCode::A]));
        assert!(career.matches_any(&[CategoryCode::I]));
        assert!(!career.matches_any(&[CategoryCode::S, CategoryCode::C]));
        assert!(!career.matches_any(&[]));
    }
}
