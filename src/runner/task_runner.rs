//! Concurrent task runner
//!
//! Spawns every configured task at once, then reports outcomes in the order
//! the tasks were configured. A task's report is logged as soon as it and
//! every task before it have finished.

use colored::Colorize;
use futures_util::StreamExt;

use crate::concurrent::run_all_streaming;
use crate::config::Task;
use crate::error::TaskError;
use crate::executor::{execute_with, CommandResult, Shell};
use crate::logging::{FAIL_TARGET, SUCCESS_TARGET};
use crate::timing::{timed_async, TimedResult};

/// Outcome of one task
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    /// The task that ran
    pub task: Task,
    /// Captured command result
    pub result: CommandResult,
    /// Formatted wall-clock duration
    pub duration: String,
}

impl TaskOutcome {
    pub fn success(&self) -> bool {
        self.result.success
    }
}

/// Runs a fixed set of tasks concurrently
#[derive(Debug, Clone, Default)]
pub struct TaskRunner {
    tasks: Vec<Task>,
    shell: Shell,
}

impl TaskRunner {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            shell: Shell::default(),
        }
    }

    /// Run tasks through `shell` instead of the platform default
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Run every task and report whether all of them succeeded
    ///
    /// # Errors
    /// The first task, in configured order, that could not run at all
    pub async fn run_tasks(&self) -> Result<bool, TaskError> {
        Ok(self
            .run_and_collect()
            .await?
            .iter()
            .all(TaskOutcome::success))
    }

    /// Run every task, logging and returning each outcome in configured order
    pub async fn run_and_collect(&self) -> Result<Vec<TaskOutcome>, TaskError> {
        if self.tasks.is_empty() {
            tracing::warn!("Nothing to do. Getting bored...");
            return Ok(Vec::new());
        }

        tracing::info!("To do:");
        for task in &self.tasks {
            if task.name == task.command {
                tracing::info!("  • {}", task.name);
            } else {
                tracing::info!("  • {}: {}", task.name, task.command.dimmed());
            }
        }

        let TimedResult {
            value: outcomes,
            duration,
        } = timed_async(self.run_streaming()).await;
        let outcomes = outcomes?;

        tracing::info!("{}", summary_line(outcomes.len(), &duration));

        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| !o.success())
            .map(|o| o.task.name.as_str())
            .collect();
        if !failed.is_empty() {
            tracing::error!("Failed tasks: {}", failed.join(", "));
        }

        Ok(outcomes)
    }

    async fn run_streaming(&self) -> Result<Vec<TaskOutcome>, TaskError> {
        let units = self
            .tasks
            .iter()
            .cloned()
            .map(|task| run_task(self.shell.clone(), task));
        let mut results = run_all_streaming(units);
        let mut outcomes = Vec::with_capacity(results.remaining());

        while let Some(outcome) = results.next().await {
            let outcome = outcome??;
            log_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

/// Execute a single task, timing it
async fn run_task(shell: Shell, task: Task) -> Result<TaskOutcome, TaskError> {
    let TimedResult { value, duration } = timed_async(execute_with(&shell, &task.command)).await;

    Ok(TaskOutcome {
        result: value?,
        task,
        duration,
    })
}

fn summary_line(count: usize, duration: &str) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Ran {} {} in {}", count, noun, duration)
}

fn log_outcome(outcome: &TaskOutcome) {
    let name = &outcome.task.name;
    let duration = outcome.duration.dimmed();

    if outcome.success() {
        tracing::info!(target: SUCCESS_TARGET, "{} {} {}", "✔".green(), name, duration);
    } else {
        tracing::error!(target: FAIL_TARGET, "{} {} {}", "✘".red(), name, duration);
    }

    // Output is one level quieter than the outcome line
    for output in [outcome.result.stdout_lossy(), outcome.result.stderr_lossy()] {
        let output = output.trim_end();
        if output.is_empty() {
            continue;
        }
        if outcome.success() {
            tracing::debug!(target: SUCCESS_TARGET, "{}", output);
        } else {
            tracing::info!(target: FAIL_TARGET, "{}", output);
        }
    }
}
