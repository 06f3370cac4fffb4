mod config;
mod grader;

use config::TaskFile;
use grader_common::config::{GraderConfig, LogFormat};
use grader_common::suite::TestSuite;
use grader_common::types::{ExecutionResult, Submission, Task, TestCase, UserSolution};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let (config, config_warnings) = GraderConfig::from_env();

    // Logs go to stderr so stdout carries only the summary and report
    tracing::subscriber::set_global_default(log_subscriber(config.log_format, std::io::stderr))?;

    info!("Grader booting...");
    for message in &config_warnings {
        warn!("{}", message);
    }
    info!(
        evaluation_mode = ?config.evaluation_mode,
        task_file = ?config.task_file,
        report_json = config.report_json,
        "Configuration loaded"
    );

    let tasks = match &config.task_file {
        Some(path) => {
            let file = TaskFile::load(path).map_err(|e| {
                error!("Failed to load task file: {:#}", e);
                e
            })?;
            info!(path = %path.display(), tasks = file.definitions().len(), "Loaded task file");
            file.build_tasks()?
        }
        None => vec![example_task()],
    };

    let solution = UserSolution::new("user_solution_code");

    for task in &tasks {
        let submission = grader::check_solution(&solution, task, &config);
        print_summary(task, &submission);

        if config.report_json {
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
    }

    println!("Total Test Suites Created: {}", TestSuite::total_created());

    Ok(())
}

/// Build the log subscriber, writing events to `writer`
fn log_subscriber<W>(format: LogFormat, writer: W) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_env_filter(filter)
                .with_target(false)
                .with_line_number(true)
                .finish(),
        ),
        LogFormat::Text => Box::new(
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_env_filter(filter)
                .with_target(false)
                .with_line_number(true)
                .finish(),
        ),
    }
}

/// Built-in scenario: one matching basic case, one mismatching advanced case
fn example_task() -> Task {
    let mut suite = TestSuite::new();
    suite.add_test(Arc::new(TestCase::basic("input1", "input1")));
    suite.add_test(Arc::new(TestCase::advanced("input2", "expected2", 3)));

    Task::new("Example Task", suite)
}

fn print_summary(task: &Task, submission: &Submission) {
    println!("Task: {}", task.description());
    println!(
        "Total tests passed: {} out of {}",
        submission.total_passed(),
        task.test_count()
    );

    for (idx, result) in submission.results().iter().enumerate() {
        println!("Test {}: {}", idx + 1, ExecutionResult::label(result.is_passed));
    }
}
