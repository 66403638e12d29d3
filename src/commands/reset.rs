use std::path::Path;

use serde_json::json;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::DataDir;

/// Wipe every method back to the canonical default board.
pub fn run(root: &Path, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut board = dir.load_tasks();
    board.reset();
    dir.save_tasks(&board);
    match format {
        Format::Json => output::print_json(&json!({"reset": true})),
        Format::Pretty => {
            println!("All tasks cleared.");
            Ok(())
        }
    }
}
