//! Menu-driven console loop over a `TaskScheduler`.
//!
//! Owns everything the scheduler core does not: prompting, parsing raw
//! text into a priority, rendering tasks, and looping until exit.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use u_taskheap::{SchedulerError, Task, TaskScheduler};

use crate::config::ListFormat;

/// Demo backlog loaded on start-up unless seeding is disabled.
pub const SAMPLE_TASKS: [(&str, i64); 4] = [
    ("Review database server", 9),
    ("Send weekly report", 5),
    ("Fix critical production bug", 10),
    ("Plan team meeting", 3),
];

const MENU: &str = "\
=== Task Priority Scheduler ===
1. Add a new task
2. Attend the most urgent task
3. Show the next task
4. List all pending tasks
5. Exit
";

/// Insert the sample backlog.
pub fn seed_examples(scheduler: &mut TaskScheduler) -> Result<()> {
    for (description, priority) in SAMPLE_TASKS {
        scheduler
            .insert(description, priority)
            .with_context(|| format!("failed to seed sample task '{description}'"))?;
    }
    info!(tasks = SAMPLE_TASKS.len(), "Loaded sample tasks");
    Ok(())
}

/// Outcome of one menu selection.
enum Step {
    Continue,
    Exit,
}

/// Interactive console bound to an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    scheduler: TaskScheduler,
    list_format: ListFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, scheduler: TaskScheduler, list_format: ListFormat) -> Self {
        Self {
            input,
            output,
            scheduler,
            list_format,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };
            debug!(%choice, "Menu selection");
            match self.dispatch(&choice)? {
                Step::Continue => {}
                Step::Exit => break,
            }
        }
        writeln!(self.output, "\nExiting...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Hand back the scheduler, e.g. to inspect it after a session.
    pub fn into_scheduler(self) -> TaskScheduler {
        self.scheduler
    }

    fn dispatch(&mut self, choice: &str) -> Result<Step> {
        match choice {
            "1" => {
                if !self.add_task()? {
                    return Ok(Step::Exit);
                }
            }
            "2" => self.attend_next()?,
            "3" => self.show_next()?,
            "4" => self.list_tasks()?,
            "5" => return Ok(Step::Exit),
            _ => writeln!(self.output, "\nInvalid option, try again.")?,
        }
        Ok(Step::Continue)
    }

    /// Returns `false` if input ended mid-prompt.
    fn add_task(&mut self) -> Result<bool> {
        let Some(description) = self.prompt("Task description: ")? else {
            return Ok(false);
        };
        if description.is_empty() {
            writeln!(self.output, "\nERROR: description must not be empty.")?;
            return Ok(true);
        }
        let Some(raw_priority) = self.prompt("Task priority (1-10): ")? else {
            return Ok(false);
        };
        let priority = match raw_priority.parse::<i64>() {
            Ok(p) => p,
            Err(_) => {
                writeln!(self.output, "\nERROR: priority must be a number.")?;
                return Ok(true);
            }
        };

        match self.scheduler.insert(description.as_str(), priority) {
            Ok(sequence) => writeln!(
                self.output,
                "\nTask '{description}' with priority {priority} added (#{sequence})."
            )?,
            Err(err @ SchedulerError::InvalidPriority { .. }) => {
                writeln!(self.output, "\nERROR: {err}.")?
            }
        }
        Ok(true)
    }

    fn attend_next(&mut self) -> Result<()> {
        match self.scheduler.pop_highest() {
            Some(task) => {
                let rule = "*".repeat(45);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "  ATTENDING THE MOST URGENT TASK")?;
                writeln!(self.output, "{rule}")?;
                self.write_task_fields(&task)?;
                writeln!(self.output, "{rule}")?;
            }
            None => writeln!(self.output, "\nNo pending tasks.")?,
        }
        Ok(())
    }

    fn show_next(&mut self) -> Result<()> {
        match self.scheduler.peek_highest().cloned() {
            Some(task) => {
                let rule = "-".repeat(45);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "  NEXT TASK IN QUEUE")?;
                self.write_task_fields(&task)?;
                writeln!(self.output, "{rule}")?;
            }
            None => writeln!(self.output, "\nNo pending tasks.")?,
        }
        Ok(())
    }

    fn list_tasks(&mut self) -> Result<()> {
        let tasks = self.scheduler.list_all();
        if self.list_format == ListFormat::Json {
            let json = serde_json::to_string_pretty(&tasks).context("failed to encode tasks")?;
            writeln!(self.output, "{json}")?;
            return Ok(());
        }
        if tasks.is_empty() {
            writeln!(self.output, "\nNo pending tasks.")?;
            return Ok(());
        }

        let rule = "=".repeat(50);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "        PENDING TASKS")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{:<12}Description", "Priority")?;
        writeln!(self.output, "{}", "-".repeat(50))?;
        for task in &tasks {
            writeln!(
                self.output,
                "{:<12}{}",
                task.priority_value(),
                task.description
            )?;
        }
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Total pending tasks: {}", tasks.len())?;
        Ok(())
    }

    fn write_task_fields(&mut self, task: &Task) -> Result<()> {
        writeln!(self.output, "   Description: {}", task.description)?;
        writeln!(self.output, "   Priority:    {}", task.priority)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
