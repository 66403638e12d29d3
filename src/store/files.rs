//! Whole-document JSON persistence: read-modify-write, last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::rpg::RpgLog;
use crate::store::settings::Settings;
use crate::store::tasks::TaskBoard;

/// Root of a dashboard data directory.
///
/// Layout:
/// ```text
/// <root>/tasks.json            the task board
/// <root>/settings.json         theme + passthrough settings
/// <root>/stats/progress.json   the rpg log
/// <root>/wallpaper/wallpaper.svg
/// ```
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.root.join("tasks.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    pub fn rpg_path(&self) -> PathBuf {
        self.root.join("stats").join("progress.json")
    }

    pub fn wallpaper_path(&self) -> PathBuf {
        self.root.join("wallpaper").join("wallpaper.svg")
    }

    /// Load the task board, falling back to the default board when the
    /// file is missing or malformed. Fixed-slot lengths are re-normalized
    /// after every load.
    pub fn load_tasks(&self) -> TaskBoard {
        let mut board: TaskBoard = load_or_default(&self.tasks_path());
        board.normalize();
        board
    }

    pub fn save_tasks(&self, board: &TaskBoard) {
        save(&self.tasks_path(), board);
    }

    pub fn load_settings(&self) -> Settings {
        load_or_default(&self.settings_path())
    }

    pub fn save_settings(&self, settings: &Settings) {
        save(&self.settings_path(), settings);
    }

    /// Load the rpg log; absent or corrupt files read as an empty log.
    pub fn load_rpg(&self) -> RpgLog {
        load_or_default(&self.rpg_path())
    }

    pub fn save_rpg(&self, rpg: &RpgLog) {
        save(&self.rpg_path(), rpg);
    }
}

/// Read and parse a JSON document. Missing files and parse failures both
/// degrade to the default value; the latter is logged. Errors never reach
/// the caller.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(err) => {
            error!("error reading {}: {err}", path.display());
            return T::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            error!("error loading {}: {err}", path.display());
            T::default()
        }
    }
}

/// Overwrite a document in place, pretty-printed with 4-space indents.
/// Write failures are logged and swallowed; callers observe a no-op.
fn save<T: Serialize>(path: &Path, value: &T) {
    if let Some(parent) = path.parent()
        && let Err(err) = fs::create_dir_all(parent)
    {
        error!("error creating {}: {err}", parent.display());
        return;
    }
    let json = match to_pretty_json(value) {
        Ok(json) => json,
        Err(err) => {
            error!("error serializing {}: {err}", path.display());
            return;
        }
    };
    if let Err(err) = fs::write(path, json) {
        error!("error saving {}: {err}", path.display());
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use tempfile::tempdir;

    #[test]
    fn missing_files_load_as_defaults() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        assert_eq!(data.load_tasks(), TaskBoard::default());
        assert_eq!(data.load_settings(), Settings::default());
        assert!(data.load_rpg().is_empty());
    }

    #[test]
    fn corrupt_json_loads_as_defaults_without_failing() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        fs::write(data.tasks_path(), "{not json").unwrap();
        fs::write(data.settings_path(), "[]").unwrap();

        assert_eq!(data.load_tasks(), TaskBoard::default());
        assert_eq!(data.load_settings(), Settings::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        data.save_rpg(&RpgLog::default());
        assert!(data.rpg_path().exists());
    }

    #[test]
    fn board_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());

        let mut board = data.load_tasks();
        board.add_todo("Water plants", Priority::Low);
        board.set_frog("File taxes", false);
        data.save_tasks(&board);

        let reloaded = data.load_tasks();
        assert_eq!(reloaded, board);
    }

    #[test]
    fn documents_are_pretty_printed_with_four_space_indents() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        data.save_tasks(&TaskBoard::default());

        let text = fs::read_to_string(data.tasks_path()).unwrap();
        assert!(text.contains("\n    \"Eat the Frog\""));
    }

    #[test]
    fn loading_a_complete_document_is_idempotent() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());

        let mut board = TaskBoard::default();
        board.add_todo("A", Priority::High);
        data.save_tasks(&board);

        let once = data.load_tasks();
        data.save_tasks(&once);
        let twice = data.load_tasks();
        assert_eq!(once, twice);
    }
}
