//! The task board: one document holding all five method sub-documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GrowError, Result};
use crate::model::{Category, Filter, Priority, Quadrant, TaskRecord, TodoTask};

pub const TRIPLE_SLOTS: usize = 3;
pub const IVY_SLOTS: usize = 6;

/// Eat the Frog: one most-important task plus secondary tasks.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrogDoc {
    #[serde(default)]
    pub frog: TaskRecord,
    #[serde(default)]
    pub other_tasks: Vec<TaskRecord>,
}

/// Eisenhower matrix: four ordered quadrant lists.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDoc {
    #[serde(rename = "do", default)]
    pub do_quadrant: Vec<TaskRecord>,
    #[serde(default)]
    pub schedule: Vec<TaskRecord>,
    #[serde(default)]
    pub delegate: Vec<TaskRecord>,
    #[serde(default)]
    pub delete: Vec<TaskRecord>,
}

impl MatrixDoc {
    pub fn quadrant(&self, quadrant: Quadrant) -> &Vec<TaskRecord> {
        match quadrant {
            Quadrant::Do => &self.do_quadrant,
            Quadrant::Schedule => &self.schedule,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Delete => &self.delete,
        }
    }

    pub fn quadrant_mut(&mut self, quadrant: Quadrant) -> &mut Vec<TaskRecord> {
        match quadrant {
            Quadrant::Do => &mut self.do_quadrant,
            Quadrant::Schedule => &mut self.schedule,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Delete => &mut self.delete,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[TaskRecord])> {
        Quadrant::ALL
            .iter()
            .map(move |&q| (q, self.quadrant(q).as_slice()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDoc {
    #[serde(default)]
    pub tasks: Vec<TodoTask>,
    #[serde(default)]
    pub filter: Filter,
}

/// 3/3/3: three fixed categories of exactly three slots each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripleDoc {
    #[serde(default = "blank_triple")]
    pub outcomes: Vec<TaskRecord>,
    #[serde(default = "blank_triple")]
    pub deep_work: Vec<TaskRecord>,
    #[serde(default = "blank_triple")]
    pub maintenance: Vec<TaskRecord>,
}

impl Default for TripleDoc {
    fn default() -> Self {
        Self {
            outcomes: blank_triple(),
            deep_work: blank_triple(),
            maintenance: blank_triple(),
        }
    }
}

impl TripleDoc {
    pub fn category(&self, category: Category) -> &Vec<TaskRecord> {
        match category {
            Category::Outcomes => &self.outcomes,
            Category::DeepWork => &self.deep_work,
            Category::Maintenance => &self.maintenance,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut Vec<TaskRecord> {
        match category {
            Category::Outcomes => &mut self.outcomes,
            Category::DeepWork => &mut self.deep_work,
            Category::Maintenance => &mut self.maintenance,
        }
    }
}

/// Ivy Lee: the six most important tasks for tomorrow, plus daily notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvyDoc {
    #[serde(default = "blank_ivy")]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub notes: String,
}

impl Default for IvyDoc {
    fn default() -> Self {
        Self {
            tasks: blank_ivy(),
            notes: String::new(),
        }
    }
}

fn blank_slots(len: usize) -> Vec<TaskRecord> {
    std::iter::repeat_with(TaskRecord::default).take(len).collect()
}

fn blank_triple() -> Vec<TaskRecord> {
    blank_slots(TRIPLE_SLOTS)
}

fn blank_ivy() -> Vec<TaskRecord> {
    blank_slots(IVY_SLOTS)
}

/// The whole-task-store document. Top-level keys are the method names as
/// persisted; missing keys deserialize to their defaults and unknown keys
/// pass through `extra` untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    #[serde(rename = "Eat the Frog", default)]
    pub frog: FrogDoc,
    #[serde(rename = "Eisenhower", default)]
    pub matrix: MatrixDoc,
    #[serde(rename = "Todo List", default)]
    pub todo: TodoDoc,
    #[serde(rename = "3/3/3", default)]
    pub triple: TripleDoc,
    #[serde(rename = "Ivy Lee Method", default)]
    pub ivy: IvyDoc,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskBoard {
    /// Re-establish the fixed-slot length invariants after deserializing
    /// a hand-edited or older file.
    pub fn normalize(&mut self) {
        self.triple.outcomes.resize_with(TRIPLE_SLOTS, TaskRecord::default);
        self.triple.deep_work.resize_with(TRIPLE_SLOTS, TaskRecord::default);
        self.triple
            .maintenance
            .resize_with(TRIPLE_SLOTS, TaskRecord::default);
        self.ivy.tasks.resize_with(IVY_SLOTS, TaskRecord::default);
    }

    // --- Eat the Frog ---

    pub fn set_frog(&mut self, title: &str, done: bool) {
        self.frog.frog = TaskRecord {
            title: title.to_string(),
            done,
        };
    }

    /// Append a secondary task. Titles that trim to empty are ignored.
    pub fn add_other_task(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        self.frog.other_tasks.push(TaskRecord::new(title));
    }

    pub fn toggle_other_task(&mut self, index: usize, done: bool) -> Result<()> {
        let record = get_mut(&mut self.frog.other_tasks, index, "other_tasks")?;
        record.done = done;
        Ok(())
    }

    pub fn delete_other_task(&mut self, index: usize) -> Result<TaskRecord> {
        check_index(self.frog.other_tasks.len(), index, "other_tasks")?;
        Ok(self.frog.other_tasks.remove(index))
    }

    // --- Eisenhower ---

    /// Add a task to a quadrant. Titles that trim to empty are ignored.
    pub fn add_matrix_task(&mut self, quadrant: Quadrant, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        self.matrix.quadrant_mut(quadrant).push(TaskRecord::new(title));
    }

    /// Commit a reordered quadrant wholesale. This is how the presentation
    /// layer lands drag-and-drop moves: full replace, not incremental edits.
    pub fn replace_quadrant(&mut self, quadrant: Quadrant, tasks: Vec<TaskRecord>) {
        *self.matrix.quadrant_mut(quadrant) = tasks;
    }

    // --- Todo List ---

    /// Append a todo. Titles that trim to empty are ignored.
    pub fn add_todo(&mut self, title: &str, priority: Priority) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        self.todo.tasks.push(TodoTask {
            title: title.to_string(),
            done: false,
            priority,
        });
    }

    pub fn toggle_todo(&mut self, index: usize, done: bool) -> Result<()> {
        check_index(self.todo.tasks.len(), index, "todo tasks")?;
        self.todo.tasks[index].done = done;
        Ok(())
    }

    pub fn delete_todo(&mut self, index: usize) -> Result<TodoTask> {
        check_index(self.todo.tasks.len(), index, "todo tasks")?;
        Ok(self.todo.tasks.remove(index))
    }

    /// Drop every completed todo, preserving the relative order of the
    /// rest. Returns how many were removed.
    pub fn clear_completed_todos(&mut self) -> usize {
        let before = self.todo.tasks.len();
        self.todo.tasks.retain(|task| !task.done);
        before - self.todo.tasks.len()
    }

    /// The filter selects a view; it never mutates `tasks`.
    pub fn set_filter(&mut self, filter: Filter) {
        self.todo.filter = filter;
    }

    /// The todos visible under the current filter, with their original
    /// indices so the presentation layer can address them.
    pub fn visible_todos(&self) -> Vec<(usize, &TodoTask)> {
        self.todo
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| match self.todo.filter {
                Filter::All => true,
                Filter::Active => !task.done,
                Filter::Completed => task.done,
            })
            .collect()
    }

    // --- 3/3/3 ---

    pub fn set_triple_slot(
        &mut self,
        category: Category,
        slot: usize,
        title: &str,
        done: bool,
    ) -> Result<()> {
        if slot >= TRIPLE_SLOTS {
            return Err(GrowError::SlotOutOfRange {
                what: "3/3/3",
                slot,
                len: TRIPLE_SLOTS,
            });
        }
        self.triple.category_mut(category)[slot] = TaskRecord {
            title: title.to_string(),
            done,
        };
        Ok(())
    }

    // --- Ivy Lee ---

    pub fn set_ivy_slot(&mut self, slot: usize, title: &str, done: bool) -> Result<()> {
        if slot >= IVY_SLOTS {
            return Err(GrowError::SlotOutOfRange {
                what: "ivy lee tasks",
                slot,
                len: IVY_SLOTS,
            });
        }
        self.ivy.tasks[slot] = TaskRecord {
            title: title.to_string(),
            done,
        };
        Ok(())
    }

    pub fn set_ivy_notes(&mut self, text: &str) {
        self.ivy.notes = text.to_string();
    }

    // --- Board-wide ---

    /// Restore the canonical default board ("Clear All Tasks").
    pub fn reset(&mut self) {
        *self = TaskBoard::default();
    }
}

fn check_index(len: usize, index: usize, what: &'static str) -> Result<()> {
    if index >= len {
        return Err(GrowError::IndexOutOfRange { what, index, len });
    }
    Ok(())
}

fn get_mut<'a>(
    records: &'a mut [TaskRecord],
    index: usize,
    what: &'static str,
) -> Result<&'a mut TaskRecord> {
    let len = records.len();
    records
        .get_mut(index)
        .ok_or(GrowError::IndexOutOfRange { what, index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_has_fixed_slot_lengths() {
        let board = TaskBoard::default();
        assert_eq!(board.triple.outcomes.len(), TRIPLE_SLOTS);
        assert_eq!(board.triple.deep_work.len(), TRIPLE_SLOTS);
        assert_eq!(board.triple.maintenance.len(), TRIPLE_SLOTS);
        assert_eq!(board.ivy.tasks.len(), IVY_SLOTS);
        assert!(board.frog.other_tasks.is_empty());
        assert!(board.todo.tasks.is_empty());
    }

    #[test]
    fn partial_document_fills_missing_methods_from_defaults() {
        let json = r#"{
            "Todo List": {"tasks": [{"title": "A", "done": true, "priority": "Low"}], "filter": "active"},
            "custom-extension": {"anything": 1}
        }"#;
        let board: TaskBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.todo.tasks.len(), 1);
        assert_eq!(board.todo.filter, Filter::Active);
        // Missing methods come back as defaults.
        assert_eq!(board.frog, FrogDoc::default());
        assert_eq!(board.triple, TripleDoc::default());
        // Unknown keys pass through.
        assert!(board.extra.contains_key("custom-extension"));
    }

    #[test]
    fn complete_document_round_trips_unchanged() {
        let mut board = TaskBoard::default();
        board.set_frog("Ship release", false);
        board.add_todo("Buy milk", Priority::High);
        board.add_matrix_task(Quadrant::Schedule, "Plan trip");
        let json = serde_json::to_string(&board).unwrap();
        let parsed: TaskBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, parsed);
    }

    #[test]
    fn add_other_task_ignores_blank_titles() {
        let mut board = TaskBoard::default();
        board.add_other_task("");
        board.add_other_task("   ");
        assert!(board.frog.other_tasks.is_empty());

        board.add_other_task("Clean desk");
        assert_eq!(board.frog.other_tasks.len(), 1);
        assert_eq!(board.frog.other_tasks[0].title, "Clean desk");
        assert!(!board.frog.other_tasks[0].done);
    }

    #[test]
    fn delete_other_task_out_of_range_leaves_board_unchanged() {
        let mut board = TaskBoard::default();
        board.add_other_task("Only one");
        let before = board.clone();

        let err = board.delete_other_task(5).unwrap_err();
        assert_eq!(err.code(), "index_out_of_range");
        assert_eq!(board, before);
    }

    #[test]
    fn clear_completed_preserves_active_order() {
        let mut board = TaskBoard::default();
        board.add_todo("A", Priority::Medium);
        board.add_todo("B", Priority::Medium);
        board.add_todo("C", Priority::Medium);
        board.toggle_todo(0, true).unwrap();
        board.toggle_todo(2, true).unwrap();

        let removed = board.clear_completed_todos();
        assert_eq!(removed, 2);
        assert_eq!(board.todo.tasks.len(), 1);
        assert_eq!(board.todo.tasks[0].title, "B");
        assert!(!board.todo.tasks[0].done);
    }

    #[test]
    fn filter_is_a_view_not_a_mutation() {
        let mut board = TaskBoard::default();
        board.add_todo("A", Priority::Medium);
        board.add_todo("B", Priority::Medium);
        board.toggle_todo(0, true).unwrap();

        board.set_filter(Filter::Completed);
        let visible = board.visible_todos();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 0);
        assert_eq!(board.todo.tasks.len(), 2);

        board.set_filter(Filter::Active);
        let visible = board.visible_todos();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 1);
    }

    #[test]
    fn replace_quadrant_is_a_full_replace() {
        let mut board = TaskBoard::default();
        board.add_matrix_task(Quadrant::Do, "First");
        board.add_matrix_task(Quadrant::Do, "Second");

        board.replace_quadrant(Quadrant::Do, vec![TaskRecord::new("Only")]);
        assert_eq!(board.matrix.do_quadrant.len(), 1);
        assert_eq!(board.matrix.do_quadrant[0].title, "Only");
    }

    #[test]
    fn triple_slot_bounds_are_enforced() {
        let mut board = TaskBoard::default();
        board
            .set_triple_slot(Category::DeepWork, 2, "Refactor parser", true)
            .unwrap();
        assert_eq!(board.triple.deep_work[2].title, "Refactor parser");

        let err = board
            .set_triple_slot(Category::Outcomes, 3, "Too far", false)
            .unwrap_err();
        assert_eq!(err.code(), "slot_out_of_range");
        assert_eq!(board.triple.outcomes.len(), TRIPLE_SLOTS);
    }

    #[test]
    fn ivy_slots_and_notes() {
        let mut board = TaskBoard::default();
        board.set_ivy_slot(5, "Call accountant", false).unwrap();
        board.set_ivy_notes("Remember invoices");
        assert_eq!(board.ivy.tasks[5].title, "Call accountant");
        assert_eq!(board.ivy.notes, "Remember invoices");

        assert!(board.set_ivy_slot(6, "Off the end", false).is_err());
    }

    #[test]
    fn normalize_restores_fixed_lengths() {
        let json = r#"{
            "3/3/3": {"outcomes": [{"title": "A", "done": false}]},
            "Ivy Lee Method": {"tasks": [], "notes": ""}
        }"#;
        let mut board: TaskBoard = serde_json::from_str(json).unwrap();
        board.normalize();
        assert_eq!(board.triple.outcomes.len(), TRIPLE_SLOTS);
        assert_eq!(board.triple.outcomes[0].title, "A");
        assert_eq!(board.ivy.tasks.len(), IVY_SLOTS);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut board = TaskBoard::default();
        board.add_todo("Something", Priority::Low);
        board.set_frog("Frog", true);
        board.reset();
        assert_eq!(board, TaskBoard::default());
    }
}
