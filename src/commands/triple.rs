use std::path::Path;

use crate::error::Result;
use crate::model::Category;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::tasks::TaskBoard;

pub fn set(
    root: &Path,
    category: Category,
    slot: usize,
    title: &str,
    done: bool,
    format: Format,
) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.set_triple_slot(category, slot, title, done)?;
    dir.save_tasks(&board);
    print(&board, format)
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    print(&board, format)
}

fn print(board: &TaskBoard, format: Format) -> Result<()> {
    match format {
        Format::Json => output::print_json(&board.triple),
        Format::Pretty => {
            for category in Category::ALL {
                println!("{category}:");
                for (slot, record) in board.triple.category(category).iter().enumerate() {
                    output::print_record_line(slot, record);
                }
            }
            Ok(())
        }
    }
}
