//! Kanban board view model.
//!
//! A pure projection of [`TaskStore`] state at a reference time; nothing
//! here mutates the store. Drops are fed back through
//! [`TaskStore::drag_end`].

use chrono::{DateTime, Utc};

use crate::api::TaskApi;
use crate::model::{Priority, Task, TaskStatus};
use crate::store::TaskStore;

/// A board column: the status it collects and its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Status of the tasks listed in the column.
    pub key: TaskStatus,
    /// Heading shown above the column.
    pub title: &'static str,
}

/// The three columns in display order.
pub const COLUMNS: [Column; 3] = [
    Column {
        key: TaskStatus::Pending,
        title: "Pending",
    },
    Column {
        key: TaskStatus::InProgress,
        title: "In Progress",
    },
    Column {
        key: TaskStatus::Completed,
        title: "Completed",
    },
];

/// A task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Task identifier, used as the drag handle.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description, `None` when empty.
    pub description: Option<String>,
    /// Priority badge text.
    pub priority_label: &'static str,
    /// Priority, for badge styling.
    pub priority: Priority,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Rendered struck through when true.
    pub completed: bool,
    /// Due date passed and not completed.
    pub overdue: bool,
}

impl Card {
    fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: Some(task.description.clone()).filter(|text| !text.is_empty()),
            priority_label: task.priority.label(),
            priority: task.priority,
            due_date: task.due_date,
            completed: task.completed,
            overdue: task.is_overdue(now),
        }
    }
}

/// A column with its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Column definition.
    pub column: Column,
    /// Cards in store order.
    pub cards: Vec<Card>,
}

/// A statistic tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    /// Tile caption.
    pub label: &'static str,
    /// Count.
    pub value: usize,
}

/// Columns and stat tiles for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Columns in [`COLUMNS`] order.
    pub columns: Vec<ColumnView>,
    /// "Total Tasks", "Completed" and "Pending" tiles.
    pub stats: [StatTile; 3],
}

impl BoardView {
    /// Project the store's filtered tasks onto the board at time `now`.
    pub fn build<A>(store: &TaskStore<A>, now: DateTime<Utc>) -> Self
    where
        A: TaskApi + ?Sized,
    {
        let visible = store.visible();
        let columns = COLUMNS
            .iter()
            .map(|column| ColumnView {
                column: *column,
                cards: visible
                    .iter()
                    .filter(|task| task.status == column.key)
                    .map(|task| Card::from_task(task, now))
                    .collect(),
            })
            .collect();
        let stats = store.stats();
        Self {
            columns,
            stats: [
                StatTile {
                    label: "Total Tasks",
                    value: stats.total,
                },
                StatTile {
                    label: "Completed",
                    value: stats.completed,
                },
                StatTile {
                    label: "Pending",
                    value: stats.pending,
                },
            ],
        }
    }

    /// Cards of the column collecting `status`.
    pub fn column(&self, status: TaskStatus) -> &[Card] {
        self.columns
            .iter()
            .find(|view| view.column.key == status)
            .map_or(&[][..], |view| view.cards.as_slice())
    }
}
