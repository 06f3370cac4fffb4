use crate::strategy::ComparisonStrategy;
use crate::suite::TestSuite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

pub const PASSED_LABEL: &str = "Passed";
pub const FAILED_LABEL: &str = "Failed";

/// Variant-specific data of a test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CaseKind {
    Basic { strategy: ComparisonStrategy },
    Advanced { complexity_level: u32 },
}

/// Case kind selector used by `create_case` and task files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKindSpec {
    #[default]
    Basic,
    Advanced,
}

impl std::fmt::Display for CaseKindSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseKindSpec::Basic => write!(f, "basic"),
            CaseKindSpec::Advanced => write!(f, "advanced"),
        }
    }
}

/// One input/expected pair plus the rule used to compare them
///
/// An Advanced case has no separately stored strategy: it always compares
/// through `ComparisonStrategy::Advanced` at its own complexity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    input: String,
    expected: String,
    #[serde(flatten)]
    kind: CaseKind,
}

impl TestCase {
    /// Basic case compared with the Simple strategy
    pub fn basic(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::with_strategy(input, expected, ComparisonStrategy::Simple)
    }

    /// Basic case with an explicit comparison strategy
    pub fn with_strategy(
        input: impl Into<String>,
        expected: impl Into<String>,
        strategy: ComparisonStrategy,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            kind: CaseKind::Basic { strategy },
        }
    }

    pub fn advanced(
        input: impl Into<String>,
        expected: impl Into<String>,
        complexity_level: u32,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            kind: CaseKind::Advanced { complexity_level },
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn kind(&self) -> &CaseKind {
        &self.kind
    }

    /// Complexity level of an Advanced case, `None` for Basic cases
    pub fn complexity_level(&self) -> Option<u32> {
        match self.kind {
            CaseKind::Basic { .. } => None,
            CaseKind::Advanced { complexity_level } => Some(complexity_level),
        }
    }

    pub fn strategy(&self) -> ComparisonStrategy {
        match self.kind {
            CaseKind::Basic { strategy } => strategy,
            CaseKind::Advanced { complexity_level } => {
                ComparisonStrategy::Advanced { complexity_level }
            }
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self.kind, CaseKind::Advanced { .. })
    }

    /// Evaluate stored input against expected value
    pub fn run(&self) -> bool {
        if let CaseKind::Advanced { complexity_level } = self.kind {
            info!(complexity_level, "Running advanced test");
        }
        self.strategy().evaluate(&self.input, &self.expected)
    }
}

/// Build a test case from a kind selector
///
/// Returns `None` for an Advanced case without a complexity level. The level
/// is ignored for Basic cases.
pub fn create_case(
    input: impl Into<String>,
    expected: impl Into<String>,
    kind: CaseKindSpec,
    complexity_level: Option<u32>,
) -> Option<TestCase> {
    match kind {
        CaseKindSpec::Basic => Some(TestCase::basic(input, expected)),
        CaseKindSpec::Advanced => {
            complexity_level.map(|level| TestCase::advanced(input, expected, level))
        }
    }
}

/// A named unit of work bundling a test suite
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    test_suite: TestSuite,
}

impl Task {
    pub fn new(description: impl Into<String>, test_suite: TestSuite) -> Self {
        Self {
            description: description.into(),
            test_suite,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn test_suite(&self) -> &TestSuite {
        &self.test_suite
    }

    pub fn test_count(&self) -> usize {
        self.test_suite.test_count()
    }
}

/// Submitted solution payload, never parsed or executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSolution {
    pub solution_code: String,
}

impl UserSolution {
    pub fn new(solution_code: impl Into<String>) -> Self {
        Self {
            solution_code: solution_code.into(),
        }
    }

    pub fn solution_code(&self) -> &str {
        &self.solution_code
    }
}

/// Outcome of grading a single test case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub actual_output: String,
    pub is_passed: bool,
}

impl ExecutionResult {
    pub fn new(actual_output: impl Into<String>, is_passed: bool) -> Self {
        Self {
            actual_output: actual_output.into(),
            is_passed,
        }
    }

    /// "Passed"/"Failed" label for a verdict
    pub fn label(passed: bool) -> &'static str {
        if passed {
            PASSED_LABEL
        } else {
            FAILED_LABEL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Initialized,
    Grading,
    Finalized,
}

/// Record of grading one solution against a task's suite
///
/// Result slots are sized to the suite at construction. Once finalized, the
/// submission refuses further writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    id: Uuid,
    solution: UserSolution,
    results: Vec<ExecutionResult>,
    total_passed: usize,
    state: SubmissionState,
    graded_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn new(solution: UserSolution, test_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            solution,
            results: vec![ExecutionResult::default(); test_count],
            total_passed: 0,
            state: SubmissionState::Initialized,
            graded_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn solution(&self) -> &UserSolution {
        &self.solution
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn graded_at(&self) -> Option<DateTime<Utc>> {
        self.graded_at
    }

    pub fn total_passed(&self) -> usize {
        self.total_passed
    }

    pub fn test_count(&self) -> usize {
        self.results.len()
    }

    pub fn total_failed(&self) -> usize {
        self.test_count().saturating_sub(self.total_passed)
    }

    pub fn all_passed(&self) -> bool {
        self.total_passed == self.test_count()
    }

    /// Percentage of passed cases, 0.0 for an empty suite
    pub fn score_percent(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.total_passed as f64 * 100.0 / self.results.len() as f64
    }

    /// Write the result for the case at `index`
    ///
    /// Moves an Initialized submission to Grading. Returns `false` without
    /// writing if the submission is finalized or the index is out of range.
    #[must_use]
    pub fn record_result(&mut self, index: usize, result: ExecutionResult) -> bool {
        if self.state == SubmissionState::Finalized {
            warn!(submission_id = %self.id, index, "Submission already finalized; result dropped");
            return false;
        }
        if index >= self.results.len() {
            warn!(
                submission_id = %self.id,
                index,
                test_count = self.results.len(),
                "Result index out of range"
            );
            return false;
        }
        self.results[index] = result;
        self.state = SubmissionState::Grading;
        true
    }

    /// Set the aggregate pass count and close the submission
    #[must_use]
    pub fn finalize(&mut self, total_passed: usize) -> bool {
        if self.state == SubmissionState::Finalized {
            warn!(submission_id = %self.id, "Submission already finalized");
            return false;
        }
        self.total_passed = total_passed;
        self.state = SubmissionState::Finalized;
        self.graded_at = Some(Utc::now());
        true
    }
}
