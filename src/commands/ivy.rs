use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::tasks::TaskBoard;

pub fn set(root: &Path, slot: usize, title: &str, done: bool, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.set_ivy_slot(slot, title, done)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn notes(root: &Path, text: &str, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.set_ivy_notes(text);
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    print(&board, format)
}

fn print(board: &TaskBoard, format: Format) -> Result<()> {
    match format {
        Format::Json => output::print_json(&board.ivy),
        Format::Pretty => {
            for (slot, record) in board.ivy.tasks.iter().enumerate() {
                output::print_record_line(slot, record);
            }
            if !board.ivy.notes.is_empty() {
                println!("notes: {}", board.ivy.notes);
            }
            Ok(())
        }
    }
}
