//! Demonstration binary: searches a range for its first prime while a spinner
//! redraws on stdout, then prints the completed results.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

use cooperative_scheduler::builders::build_demo;
use cooperative_scheduler::config::DemoConfig;
use cooperative_scheduler::core::{AppResult, TaskId};
use cooperative_scheduler::util::init_tracing;

fn format_outcomes<T: Display>(outcomes: &BTreeMap<TaskId, T>) -> String {
    let body = outcomes
        .iter()
        .map(|(id, value)| format!("{id}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

fn main() -> AppResult<()> {
    init_tracing();
    let cfg = DemoConfig::from_env().map_err(anyhow::Error::msg)?;

    let mut demo = build_demo(&cfg, io::stdout())?;
    demo.scheduler.run_until([demo.search])?;

    for (id, err) in demo.scheduler.failed() {
        tracing::warn!(task_id = *id, "task failed: {:#}", err);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    writeln!(stdout, "{}", format_outcomes(demo.scheduler.completed()))?;
    Ok(())
}
