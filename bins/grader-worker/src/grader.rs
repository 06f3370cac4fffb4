/// Grading Pass - Checks a Solution Against a Task
///
/// **Core Responsibility:**
/// Walk a task's suite in order, record one ExecutionResult per case,
/// and aggregate the pass count into a Submission.
///
/// **Critical Properties:**
/// - Never inspects the submitted solution
/// - Every case is always evaluated; there is no error path
/// - Result i always belongs to the case at suite index i
///
/// **Evaluation Modes:**
/// - Single: one evaluation per case, verdict reused for label and flag
/// - Double: label and flag come from two separate evaluations, so
///   advanced cases log twice per case

use grader_common::config::{EvaluationMode, GraderConfig};
use grader_common::types::{ExecutionResult, Submission, Task, TestCase, UserSolution};
use tracing::{debug, info};

/// Grade a single test case
///
/// The solution is accepted for signature symmetry with `check_solution`
/// but is not consulted: verdicts are intrinsic to the case.
pub fn run_test_case(
    _solution: &UserSolution,
    test: &TestCase,
    mode: EvaluationMode,
) -> ExecutionResult {
    grade_with(mode, || test.run())
}

/// Build a result from one or two calls to `evaluate`, per the mode
///
/// In Double mode the label comes from the first call and the flag from the
/// second.
fn grade_with<F>(mode: EvaluationMode, mut evaluate: F) -> ExecutionResult
where
    F: FnMut() -> bool,
{
    match mode {
        EvaluationMode::Single => {
            let passed = evaluate();
            ExecutionResult::new(ExecutionResult::label(passed), passed)
        }
        EvaluationMode::Double => {
            let label = ExecutionResult::label(evaluate());
            ExecutionResult::new(label, evaluate())
        }
    }
}

/// Grade a solution against every case of a task's suite
///
/// ## Returns
/// A finalized Submission with one result per case and the pass count
pub fn check_solution(
    solution: &UserSolution,
    task: &Task,
    config: &GraderConfig,
) -> Submission {
    let suite = task.test_suite();
    let mut submission = Submission::new(solution.clone(), suite.test_count());

    info!(
        submission_id = %submission.id(),
        task = task.description(),
        test_count = suite.test_count(),
        evaluation_mode = ?config.evaluation_mode,
        "Grading submission"
    );

    let mut total_passed = 0usize;
    for (idx, test) in suite.tests().iter().enumerate() {
        let result = run_test_case(solution, test, config.evaluation_mode);

        debug!(
            submission_id = %submission.id(),
            test_num = idx + 1,
            input = test.input(),
            expected = test.expected(),
            complexity_level = ?test.complexity_level(),
            passed = result.is_passed,
            "Test result"
        );

        if result.is_passed {
            total_passed += 1;
        }
        let recorded = submission.record_result(idx, result);
        debug_assert!(recorded, "result slot {} rejected", idx);
    }

    let finalized = submission.finalize(total_passed);
    debug_assert!(finalized, "submission finalized twice");

    info!(
        submission_id = %submission.id(),
        total_passed = submission.total_passed(),
        test_count = submission.test_count(),
        "Grading complete"
    );

    submission
}
