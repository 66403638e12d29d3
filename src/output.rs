use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::error::Result;
use crate::model::{Priority, TaskRecord, TodoTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn checkbox(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Priority chip colored like the original dashboard's badges.
pub fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "High".red(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".green(),
    }
}

pub fn print_record_line(index: usize, record: &TaskRecord) {
    println!("{:>3} {} {}", index, checkbox(record.done), record.title);
}

pub fn print_todo_line(index: usize, task: &TodoTask) {
    println!(
        "{:>3} {} {} ({})",
        index,
        checkbox(task.done),
        task.title,
        priority_badge(task.priority)
    );
}
