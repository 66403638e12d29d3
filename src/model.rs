use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single task entry. Records have positional identity only: deleting
/// one shifts the indices of everything after it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl TaskRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// A record counts toward totals only when its title is non-empty.
    pub fn is_filled(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Todo List entry: a task record plus a priority chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// Eisenhower quadrant. A task lives in exactly one quadrant at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum Quadrant {
    #[default]
    Do,
    Schedule,
    Delegate,
    Delete,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Delete,
    ];
}

/// 3/3/3 category: three major outcomes, three deep work blocks, three
/// maintenance tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum Category {
    Outcomes,
    DeepWork,
    Maintenance,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Outcomes, Category::DeepWork, Category::Maintenance];
}

/// The five productivity methods. Dispatch over this closed enum, never
/// over method-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    #[serde(rename = "Eat the Frog")]
    EatTheFrog,
    #[serde(rename = "Eisenhower")]
    Eisenhower,
    #[serde(rename = "Todo List")]
    TodoList,
    #[serde(rename = "3/3/3")]
    ThreeThreeThree,
    #[serde(rename = "Ivy Lee Method")]
    IvyLee,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::EatTheFrog,
        Method::Eisenhower,
        Method::TodoList,
        Method::ThreeThreeThree,
        Method::IvyLee,
    ];

    /// The method's document key, as written in the persisted file.
    pub fn label(self) -> &'static str {
        match self {
            Self::EatTheFrog => "Eat the Frog",
            Self::Eisenhower => "Eisenhower",
            Self::TodoList => "Todo List",
            Self::ThreeThreeThree => "3/3/3",
            Self::IvyLee => "Ivy Lee Method",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Do => write!(f, "do"),
            Self::Schedule => write!(f, "schedule"),
            Self::Delegate => write!(f, "delegate"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outcomes => write!(f, "outcomes"),
            Self::DeepWork => write!(f, "deep_work"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_record_round_trips_json() {
        let record = TaskRecord {
            title: "Write report".into(),
            done: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn priority_serializes_capitalized() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, r#""High""#);
    }

    #[test]
    fn filter_serializes_lowercase() {
        let json = serde_json::to_string(&Filter::Completed).unwrap();
        assert_eq!(json, r#""completed""#);
    }

    #[test]
    fn method_serializes_as_document_key() {
        let json = serde_json::to_string(&Method::ThreeThreeThree).unwrap();
        assert_eq!(json, r#""3/3/3""#);
        let json = serde_json::to_string(&Method::EatTheFrog).unwrap();
        assert_eq!(json, r#""Eat the Frog""#);
    }

    #[test]
    fn todo_task_defaults_fill_done_and_priority() {
        let parsed: TodoTask = serde_json::from_str(r#"{"title": "Pay rent"}"#).unwrap();
        assert!(!parsed.done);
        assert_eq!(parsed.priority, Priority::Medium);
    }

    #[test]
    fn blank_record_is_not_filled() {
        assert!(!TaskRecord::default().is_filled());
        assert!(TaskRecord::new("x").is_filled());
    }
}
