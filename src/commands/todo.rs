use std::path::Path;

use serde_json::json;

use crate::error::Result;
use crate::model::{Filter, Priority};
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::tasks::TaskBoard;

pub fn add(root: &Path, title: &str, priority: Priority, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.add_todo(title, priority);
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn toggle(root: &Path, index: usize, done: bool, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.toggle_todo(index, done)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn delete(root: &Path, index: usize, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.delete_todo(index)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn clear(root: &Path, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    let removed = board.clear_completed_todos();
    dir.save_tasks(&board);
    match format {
        Format::Json => output::print_json(&json!({
            "removed": removed,
            "remaining": board.todo.tasks.len(),
        })),
        Format::Pretty => {
            println!("Cleared {removed} completed task(s).");
            print(&board, format)
        }
    }
}

pub fn set_filter(root: &Path, filter: Filter, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.set_filter(filter);
    dir.save_tasks(&board);
    print(&board, format)
}

/// Show the list as the current filter sees it. Indices are positions in
/// the full list, so they stay valid for toggle/delete.
pub fn show(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    print(&board, format)
}

fn print(board: &TaskBoard, format: Format) -> Result<()> {
    let visible = board.visible_todos();
    match format {
        Format::Json => {
            let tasks: Vec<_> = visible
                .iter()
                .map(|(index, task)| {
                    json!({
                        "index": index,
                        "title": task.title,
                        "done": task.done,
                        "priority": task.priority,
                    })
                })
                .collect();
            output::print_json(&json!({
                "filter": board.todo.filter,
                "tasks": tasks,
            }))
        }
        Format::Pretty => {
            println!("Filter: {}", board.todo.filter);
            for (index, task) in visible {
                output::print_todo_line(index, task);
            }
            Ok(())
        }
    }
}
