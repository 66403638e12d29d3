use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::tasks::TaskBoard;

pub fn set(root: &Path, title: &str, done: bool, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.set_frog(title, done);
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn add(root: &Path, title: &str, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.add_other_task(title);
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn toggle(root: &Path, index: usize, done: bool, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.toggle_other_task(index, done)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn delete(root: &Path, index: usize, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.delete_other_task(index)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    print(&board, format)
}

fn print(board: &TaskBoard, format: Format) -> Result<()> {
    match format {
        Format::Json => output::print_json(&board.frog),
        Format::Pretty => {
            let frog = &board.frog.frog;
            if frog.is_filled() {
                println!("Frog: {} {}", output::checkbox(frog.done), frog.title);
            } else {
                println!("Frog: (not set)");
            }
            for (index, task) in board.frog.other_tasks.iter().enumerate() {
                output::print_record_line(index, task);
            }
            Ok(())
        }
    }
}
