// Grader configuration, read from the environment

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_EVALUATION_MODE: &str = "GRADER_EVALUATION_MODE";
pub const ENV_TASK_FILE: &str = "GRADER_TASK_FILE";
pub const ENV_REPORT_JSON: &str = "GRADER_REPORT_JSON";
pub const ENV_LOG_FORMAT: &str = "GRADER_LOG_FORMAT";

/// How many times each case is evaluated during grading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Evaluate once, reuse the verdict for label and flag
    #[default]
    Single,
    /// Evaluate once for the label and again for the flag
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraderConfig {
    pub evaluation_mode: EvaluationMode,
    pub task_file: Option<PathBuf>,
    pub report_json: bool,
    pub log_format: LogFormat,
}

impl GraderConfig {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    ///
    /// Unknown values fall back to defaults and are reported in the returned
    /// warnings, since this runs before logging is set up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(mode) = lookup(ENV_EVALUATION_MODE) {
            match mode.trim().to_lowercase().as_str() {
                "single" => config.evaluation_mode = EvaluationMode::Single,
                "double" => config.evaluation_mode = EvaluationMode::Double,
                other => warnings.push(format!(
                    "Unknown {} '{}', using single",
                    ENV_EVALUATION_MODE, other
                )),
            }
        }

        config.task_file = lookup(ENV_TASK_FILE)
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        config.report_json = lookup(ENV_REPORT_JSON)
            .map(|value| value.trim().to_lowercase() == "true")
            .unwrap_or(false);

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            match format.trim().to_lowercase().as_str() {
                "text" => config.log_format = LogFormat::Text,
                "json" => config.log_format = LogFormat::Json,
                other => warnings.push(format!(
                    "Unknown {} '{}', using text",
                    ENV_LOG_FORMAT, other
                )),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = GraderConfig::from_lookup(|_| None);
        assert_eq!(config, GraderConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.evaluation_mode, EvaluationMode::Single);
        assert!(config.task_file.is_none());
        assert!(!config.report_json);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_all_values_set() {
        let (config, warnings) = GraderConfig::from_lookup(lookup_from(&[
            (ENV_EVALUATION_MODE, "Double"),
            (ENV_TASK_FILE, "config/tasks.json"),
            (ENV_REPORT_JSON, "TRUE"),
            (ENV_LOG_FORMAT, "json"),
        ]));

        assert_eq!(config.evaluation_mode, EvaluationMode::Double);
        assert_eq!(config.task_file, Some(PathBuf::from("config/tasks.json")));
        assert!(config.report_json);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let (config, warnings) = GraderConfig::from_lookup(lookup_from(&[
            (ENV_EVALUATION_MODE, "triple"),
            (ENV_TASK_FILE, "   "),
            (ENV_REPORT_JSON, "yes"),
            (ENV_LOG_FORMAT, "xml"),
        ]));

        assert_eq!(config, GraderConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains(ENV_EVALUATION_MODE));
        assert!(warnings[0].contains("triple"));
        assert!(warnings[1].contains(ENV_LOG_FORMAT));
        assert!(warnings[1].contains("xml"));
    }

    #[test]
    fn test_single_unknown_value_warns_once() {
        let (config, warnings) = GraderConfig::from_lookup(lookup_from(&[
            (ENV_EVALUATION_MODE, "double"),
            (ENV_LOG_FORMAT, "yaml"),
        ]));

        assert_eq!(config.evaluation_mode, EvaluationMode::Double);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(warnings, vec![format!("Unknown {} 'yaml', using text", ENV_LOG_FORMAT)]);
    }
}
