use crate::types::TestCase;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Suites constructed since process start, never reset
static TOTAL_SUITES_CREATED: AtomicUsize = AtomicUsize::new(0);

/// Ordered collection of shared test cases
///
/// Insertion order is kept until `sort_tests_by_input` is called. Cloning a
/// suite copies the case handles and does not count as a new construction.
#[derive(Debug, Clone)]
pub struct TestSuite {
    tests: Vec<Arc<TestCase>>,
}

impl TestSuite {
    pub fn new() -> Self {
        let total = TOTAL_SUITES_CREATED.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(total_suites_created = total, "Test suite created");
        Self { tests: Vec::new() }
    }

    /// Number of suites constructed in this process
    pub fn total_created() -> usize {
        TOTAL_SUITES_CREATED.load(Ordering::SeqCst)
    }

    /// Append a case; duplicates are kept
    pub fn add_test(&mut self, test: Arc<TestCase>) {
        self.tests.push(test);
    }

    pub fn tests(&self) -> &[Arc<TestCase>] {
        &self.tests
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Stable sort by input, lexicographic
    pub fn sort_tests_by_input(&mut self) {
        self.tests.sort_by(|a, b| a.input().cmp(b.input()));
    }

    /// First case in current order whose expected value equals `expected`
    pub fn find_test_by_expected(&self, expected: &str) -> Option<Arc<TestCase>> {
        self.tests
            .iter()
            .find(|test| test.expected() == expected)
            .cloned()
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TestCase> for TestSuite {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        let mut suite = TestSuite::new();
        for test in iter {
            suite.add_test(Arc::new(test));
        }
        suite
    }
}
