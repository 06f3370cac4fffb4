// Task definition loading for the grader worker
use anyhow::{bail, Context, Result};
use grader_common::suite::TestSuite;
use grader_common::types::{create_case, CaseKindSpec, Task};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseDefinition {
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub kind: CaseKindSpec,
    #[serde(default)]
    pub complexity_level: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub description: String,
    #[serde(default)]
    pub sort_by_input: bool,
    pub test_cases: Vec<TestCaseDefinition>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TasksJson {
    tasks: Vec<TaskDefinition>,
}

/// Task definitions loaded from a tasks.json file
#[derive(Debug, Clone)]
pub struct TaskFile {
    definitions: Vec<TaskDefinition>,
}

impl TaskFile {
    /// Load task definitions from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Task file not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid task file {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let tasks_json: TasksJson =
            serde_json::from_str(content).context("Failed to parse task definitions")?;

        if tasks_json.tasks.is_empty() {
            bail!("No tasks defined");
        }

        for task in &tasks_json.tasks {
            validate_task(task)?;
        }

        Ok(Self {
            definitions: tasks_json.tasks,
        })
    }

    pub fn definitions(&self) -> &[TaskDefinition] {
        &self.definitions
    }

    /// Build runnable tasks, one suite per definition
    pub fn build_tasks(&self) -> Result<Vec<Task>> {
        self.definitions.iter().map(build_task).collect()
    }
}

fn validate_task(task: &TaskDefinition) -> Result<()> {
    if task.description.trim().is_empty() {
        bail!("Task description cannot be empty");
    }

    for (idx, case) in task.test_cases.iter().enumerate() {
        match (case.kind, case.complexity_level) {
            (CaseKindSpec::Advanced, None) => bail!(
                "Task '{}', test {}: advanced case requires complexity_level",
                task.description,
                idx + 1
            ),
            (CaseKindSpec::Basic, Some(_)) => bail!(
                "Task '{}', test {}: complexity_level is only valid for advanced cases",
                task.description,
                idx + 1
            ),
            _ => {}
        }
    }

    Ok(())
}

fn build_task(definition: &TaskDefinition) -> Result<Task> {
    let mut suite = TestSuite::new();

    for (idx, case) in definition.test_cases.iter().enumerate() {
        let test = create_case(
            case.input.clone(),
            case.expected.clone(),
            case.kind,
            case.complexity_level,
        )
        .with_context(|| {
            format!(
                "Task '{}', test {}: cannot build {} case",
                definition.description,
                idx + 1,
                case.kind
            )
        })?;
        suite.add_test(test.into());
    }

    if definition.sort_by_input {
        suite.sort_tests_by_input();
    }

    debug!(
        task = %definition.description,
        test_count = suite.test_count(),
        sorted = definition.sort_by_input,
        "Built task"
    );

    Ok(Task::new(definition.description.clone(), suite))
}
