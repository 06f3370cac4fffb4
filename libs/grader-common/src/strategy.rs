/// Comparison Strategies - How a Test Case Decides Pass/Fail
///
/// **Core Responsibility:**
/// Compare a test case's stored input against its expected value.
///
/// **Critical Properties:**
/// - Knows nothing about submissions or scoring
/// - Never looks at the submitted solution
/// - Total function: every (input, expected) pair yields a verdict
///
/// **Strategies:**
/// - Simple: exact string equality
/// - Advanced: exact string equality AND complexity level above the threshold

use serde::{Deserialize, Serialize};
use tracing::info;

/// Advanced comparisons only pass above this level
pub const ADVANCED_MIN_LEVEL_EXCLUSIVE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ComparisonStrategy {
    #[default]
    Simple,
    Advanced { complexity_level: u32 },
}

impl ComparisonStrategy {
    /// Evaluate stored input against expected value
    ///
    /// An Advanced strategy at level 2 or below never passes, even when
    /// input and expected match exactly.
    pub fn evaluate(&self, input: &str, expected: &str) -> bool {
        match self {
            ComparisonStrategy::Simple => input == expected,
            ComparisonStrategy::Advanced { complexity_level } => {
                info!(complexity_level, "Executing with complexity level");
                input == expected && *complexity_level > ADVANCED_MIN_LEVEL_EXCLUSIVE
            }
        }
    }

    pub fn complexity_level(&self) -> Option<u32> {
        match self {
            ComparisonStrategy::Simple => None,
            ComparisonStrategy::Advanced { complexity_level } => Some(*complexity_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_exact_match() {
        let strategy = ComparisonStrategy::Simple;
        assert!(strategy.evaluate("hello", "hello"));
        assert!(strategy.evaluate("", ""));
    }

    #[test]
    fn test_simple_mismatch() {
        let strategy = ComparisonStrategy::Simple;
        assert!(!strategy.evaluate("hello", "world"));
    }

    #[test]
    fn test_simple_is_case_and_whitespace_sensitive() {
        let strategy = ComparisonStrategy::Simple;
        assert!(!strategy.evaluate("Hello", "hello"));
        // No normalization here, unlike stdout comparison
        assert!(!strategy.evaluate("hello ", "hello"));
    }

    #[test]
    fn test_advanced_above_threshold() {
        let strategy = ComparisonStrategy::Advanced { complexity_level: 3 };
        assert!(strategy.evaluate("x", "x"));
        assert!(!strategy.evaluate("x", "y"));
    }

    #[test]
    fn test_advanced_at_or_below_threshold_never_passes() {
        for level in 0..=2 {
            let strategy = ComparisonStrategy::Advanced { complexity_level: level };
            assert!(!strategy.evaluate("x", "x"), "level {} must not pass", level);
        }
    }

    #[test]
    fn test_complexity_level_accessor() {
        assert_eq!(ComparisonStrategy::Simple.complexity_level(), None);
        assert_eq!(
            ComparisonStrategy::Advanced { complexity_level: 7 }.complexity_level(),
            Some(7)
        );
    }

    #[test]
    fn test_default_is_simple() {
        assert_eq!(ComparisonStrategy::default(), ComparisonStrategy::Simple);
    }
}
