pub mod answer;
pub mod assessment;
pub mod career;
pub mod category;
pub mod programme;
pub mod question;

pub use answer::{Answer, AnswerRow};
pub use assessment::{Assessment, AssessmentStatus};
pub use career::{Career, CareerSpec};
pub use category::{CategoryCode, Section};
pub use programme::{BranchSpec, EngineeringBranch, Programme, ProgrammeSpec};
pub use question::{AnswerOption, OptionSpec, Question, QuestionSpec};
