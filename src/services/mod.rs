pub mod assessment_service;
pub mod catalog_service;
pub mod scoring;
pub mod selection;

pub use assessment_service::{AssessmentService, Requester};
pub use catalog_service::{CatalogService, SeedSummary};
