use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::output::{self, Format};
use crate::stats;
use crate::store::files::DataDir;

pub fn run(root: &Path, format: Format) -> Result<()> {
    let board = DataDir::new(root).load_tasks();
    let dashboard = stats::dashboard_stats(&board);
    match format {
        Format::Json => output::print_json(&dashboard),
        Format::Pretty => {
            println!("{}", "Task Statistics".bold());
            for entry in &dashboard.methods {
                if entry.total > 0 {
                    println!(
                        "  {}: {} of {} complete",
                        entry.method, entry.done, entry.total
                    );
                }
            }
            println!(
                "{}: {} of {} complete ({}%)",
                "Overall".bold(),
                dashboard.done,
                dashboard.total,
                dashboard.percent
            );
            Ok(())
        }
    }
}
