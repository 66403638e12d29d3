//! Dashboard statistics derived from the task board.

use serde::Serialize;

use crate::model::{Method, TaskRecord};
use crate::store::tasks::TaskBoard;

/// Completion counts for one method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MethodStats {
    pub total: usize,
    pub done: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodEntry {
    pub method: Method,
    pub total: usize,
    pub done: usize,
}

/// The aggregate dashboard view. Methods with no tasks are listed but
/// excluded from the overall totals and percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub methods: Vec<MethodEntry>,
    pub total: usize,
    pub done: usize,
    pub percent: u8,
}

/// Counting rules per method. One rule holds everywhere: a done mark
/// only counts when the record's title is non-empty.
pub fn method_stats(board: &TaskBoard, method: Method) -> MethodStats {
    match method {
        Method::EatTheFrog => {
            let frog = &board.frog.frog;
            let mut stats = list_stats(&board.frog.other_tasks);
            if frog.is_filled() {
                stats.total += 1;
                if frog.done {
                    stats.done += 1;
                }
            }
            stats
        }
        Method::Eisenhower => board
            .matrix
            .iter()
            .fold(MethodStats::default(), |acc, (_, tasks)| {
                let q = list_stats(tasks);
                MethodStats {
                    total: acc.total + q.total,
                    done: acc.done + q.done,
                }
            }),
        // The filter is a view selector; counts cover the whole list.
        Method::TodoList => MethodStats {
            total: board.todo.tasks.len(),
            done: board.todo.tasks.iter().filter(|t| t.done).count(),
        },
        Method::ThreeThreeThree => {
            let slots = board
                .triple
                .outcomes
                .iter()
                .chain(&board.triple.deep_work)
                .chain(&board.triple.maintenance);
            slot_stats(slots)
        }
        Method::IvyLee => slot_stats(board.ivy.tasks.iter()),
    }
}

pub fn dashboard_stats(board: &TaskBoard) -> DashboardStats {
    let methods: Vec<MethodEntry> = Method::ALL
        .iter()
        .map(|&method| {
            let stats = method_stats(board, method);
            MethodEntry {
                method,
                total: stats.total,
                done: stats.done,
            }
        })
        .collect();

    let (total, done) = methods
        .iter()
        .filter(|entry| entry.total > 0)
        .fold((0, 0), |(t, d), entry| (t + entry.total, d + entry.done));

    DashboardStats {
        methods,
        total,
        done,
        percent: percent(done, total),
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

fn list_stats(tasks: &[TaskRecord]) -> MethodStats {
    MethodStats {
        total: tasks.len(),
        done: tasks.iter().filter(|t| t.done).count(),
    }
}

fn slot_stats<'a>(slots: impl Iterator<Item = &'a TaskRecord>) -> MethodStats {
    slots.fold(MethodStats::default(), |mut acc, slot| {
        if slot.is_filled() {
            acc.total += 1;
            if slot.done {
                acc.done += 1;
            }
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority, Quadrant};

    #[test]
    fn empty_board_counts_nothing() {
        let stats = dashboard_stats(&TaskBoard::default());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.done, 0);
        assert_eq!(stats.percent, 0);
        for entry in &stats.methods {
            assert_eq!((entry.total, entry.done), (0, 0));
        }
    }

    #[test]
    fn frog_counts_the_frog_only_when_titled() {
        let mut board = TaskBoard::default();
        board.add_other_task("Secondary");
        assert_eq!(
            method_stats(&board, Method::EatTheFrog),
            MethodStats { total: 1, done: 0 }
        );

        board.set_frog("Big task", true);
        assert_eq!(
            method_stats(&board, Method::EatTheFrog),
            MethodStats { total: 2, done: 1 }
        );

        // An untitled-but-done frog contributes nothing.
        board.set_frog("", true);
        assert_eq!(
            method_stats(&board, Method::EatTheFrog),
            MethodStats { total: 1, done: 0 }
        );
    }

    #[test]
    fn eisenhower_sums_all_quadrants() {
        let mut board = TaskBoard::default();
        board.add_matrix_task(Quadrant::Do, "A");
        board.add_matrix_task(Quadrant::Delegate, "B");
        board.add_matrix_task(Quadrant::Delete, "C");
        board.matrix.delegate[0].done = true;

        assert_eq!(
            method_stats(&board, Method::Eisenhower),
            MethodStats { total: 3, done: 1 }
        );
    }

    #[test]
    fn todo_counts_ignore_the_filter() {
        let mut board = TaskBoard::default();
        board.add_todo("A", Priority::High);
        board.add_todo("B", Priority::Low);
        board.toggle_todo(0, true).unwrap();
        board.set_filter(crate::model::Filter::Active);

        assert_eq!(
            method_stats(&board, Method::TodoList),
            MethodStats { total: 2, done: 1 }
        );
    }

    #[test]
    fn done_slots_with_empty_titles_never_count() {
        let mut board = TaskBoard::default();
        board
            .set_triple_slot(Category::Outcomes, 0, "", true)
            .unwrap();
        board
            .set_triple_slot(Category::DeepWork, 1, "Real work", true)
            .unwrap();
        board.set_ivy_slot(0, "", true).unwrap();
        board.set_ivy_slot(1, "Call back", false).unwrap();

        assert_eq!(
            method_stats(&board, Method::ThreeThreeThree),
            MethodStats { total: 1, done: 1 }
        );
        assert_eq!(
            method_stats(&board, Method::IvyLee),
            MethodStats { total: 1, done: 0 }
        );
    }

    #[test]
    fn aggregate_skips_empty_methods_and_rounds_percent() {
        let mut board = TaskBoard::default();
        board.add_todo("A", Priority::Medium);
        board.add_todo("B", Priority::Medium);
        board.add_todo("C", Priority::Medium);
        board.toggle_todo(0, true).unwrap();

        let stats = dashboard_stats(&board);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.done, 1);
        // 1/3 rounds to 33.
        assert_eq!(stats.percent, 33);

        board.toggle_todo(1, true).unwrap();
        let stats = dashboard_stats(&board);
        // 2/3 rounds to 67.
        assert_eq!(stats.percent, 67);
    }
}
