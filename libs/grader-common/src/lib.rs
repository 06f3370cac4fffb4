pub mod config;
pub mod strategy;
pub mod suite;
pub mod types;

pub use strategy::ComparisonStrategy;
pub use suite::TestSuite;
pub use types::{
    create_case, CaseKind, CaseKindSpec, ExecutionResult, Submission, SubmissionState, Task,
    TestCase, UserSolution,
};
