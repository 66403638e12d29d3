use std::path::Path;

use crate::error::{GrowError, Result};
use crate::model::Quadrant;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::tasks::TaskBoard;

pub fn add(root: &Path, quadrant: Quadrant, title: &str, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.add_matrix_task(quadrant, title);
    dir.save_tasks(&board);
    print(&board, format)
}

/// Mark a quadrant entry done or not done. Lands as a full-quadrant
/// replace, the same way the presentation layer commits its list state.
pub fn toggle(
    root: &Path,
    quadrant: Quadrant,
    index: usize,
    done: bool,
    format: Format,
) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();

    let mut tasks = board.matrix.quadrant(quadrant).clone();
    let len = tasks.len();
    let task = tasks.get_mut(index).ok_or(GrowError::IndexOutOfRange {
        what: "quadrant tasks",
        index,
        len,
    })?;
    task.done = done;
    board.replace_quadrant(quadrant, tasks);

    dir.save_tasks(&board);
    print(&board, format)
}

/// Move a task between quadrants (or to the end of its own), committing
/// each affected quadrant wholesale.
pub fn move_task(
    root: &Path,
    from: Quadrant,
    index: usize,
    to: Quadrant,
    format: Format,
) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();

    let mut source = board.matrix.quadrant(from).clone();
    if index >= source.len() {
        return Err(GrowError::IndexOutOfRange {
            what: "quadrant tasks",
            index,
            len: source.len(),
        });
    }
    let task = source.remove(index);
    if from == to {
        source.push(task);
        board.replace_quadrant(from, source);
    } else {
        let mut target = board.matrix.quadrant(to).clone();
        target.push(task);
        board.replace_quadrant(from, source);
        board.replace_quadrant(to, target);
    }

    dir.save_tasks(&board);
    print(&board, format)
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    print(&board, format)
}

fn print(board: &TaskBoard, format: Format) -> Result<()> {
    match format {
        Format::Json => output::print_json(&board.matrix),
        Format::Pretty => {
            for (quadrant, tasks) in board.matrix.iter() {
                println!("{quadrant}:");
                for (index, task) in tasks.iter().enumerate() {
                    output::print_record_line(index, task);
                }
            }
            Ok(())
        }
    }
}
