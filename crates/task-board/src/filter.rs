//! Search, priority and status filters over cached tasks.

use std::str::FromStr;

use crate::model::{Priority, Task, TaskStatus, UnknownValue};

/// Raised when a filter selection cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct FilterParseError(#[from] UnknownValue);

/// Priority selection; `all` matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// No restriction.
    #[default]
    All,
    /// Only tasks with this priority.
    Only(Priority),
}

impl PriorityFilter {
    fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

/// Status selection; `all` matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No restriction.
    #[default]
    All,
    /// Only tasks in this column.
    Only(TaskStatus),
}

impl StatusFilter {
    fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

/// Combined filter. A task is visible when all three parts accept it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: PriorityFilter,
    status: StatusFilter,
}

impl TaskFilter {
    /// Replace the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replace the priority selection.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the status selection.
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current priority selection.
    pub fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Current status selection.
    pub fn status(&self) -> StatusFilter {
        self.status
    }

    /// Whether `task` passes the search, priority and status parts.
    ///
    /// Search is a case-insensitive substring match over title and
    /// description; an empty search matches everything.
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.matches(task.priority)
            && self.status.matches(task.status)
            && self.matches_search(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn task() -> Task {
        Task {
            id: "65f1a2b3c4d5e6f708091a2b".to_owned(),
            title: "Quarterly Report".to_owned(),
            description: "Collect figures from finance".to_owned(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            completed: false,
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("report")]
    #[case("QUARTERLY")]
    #[case("FINANCE")]
    fn search_is_case_insensitive_over_title_and_description(task: Task, #[case] search: &str) {
        assert!(TaskFilter::default().with_search(search).matches(&task));
    }

    #[rstest]
    fn search_without_a_hit_hides_the_task(task: Task) {
        assert!(!TaskFilter::default().with_search("invoice").matches(&task));
    }

    #[rstest]
    #[case(PriorityFilter::All, StatusFilter::All, true)]
    #[case(PriorityFilter::Only(Priority::High), StatusFilter::All, true)]
    #[case(PriorityFilter::Only(Priority::Low), StatusFilter::All, false)]
    #[case(PriorityFilter::All, StatusFilter::Only(TaskStatus::InProgress), true)]
    #[case(PriorityFilter::All, StatusFilter::Only(TaskStatus::Pending), false)]
    fn selections_restrict_by_field(
        task: Task,
        #[case] priority: PriorityFilter,
        #[case] status: StatusFilter,
        #[case] visible: bool,
    ) {
        let filter = TaskFilter::default()
            .with_priority(priority)
            .with_status(status);
        assert_eq!(filter.matches(&task), visible);
    }

    #[rstest]
    fn builder_order_does_not_change_the_result(task: Task) {
        let a = TaskFilter::default()
            .with_search("report")
            .with_priority(PriorityFilter::Only(Priority::High))
            .with_status(StatusFilter::Only(TaskStatus::Completed));
        let b = TaskFilter::default()
            .with_status(StatusFilter::Only(TaskStatus::Completed))
            .with_priority(PriorityFilter::Only(Priority::High))
            .with_search("report");
        assert_eq!(a, b);
        assert!(!a.matches(&task));
    }

    #[rstest]
    #[case("all", PriorityFilter::All)]
    #[case("medium", PriorityFilter::Only(Priority::Medium))]
    fn priority_selection_parses(#[case] raw: &str, #[case] expected: PriorityFilter) {
        assert_eq!(raw.parse::<PriorityFilter>().expect("valid"), expected);
    }

    #[test]
    fn unknown_status_selection_is_rejected() {
        assert!("done".parse::<StatusFilter>().is_err());
        assert_eq!(
            "in-progress".parse::<StatusFilter>().expect("valid"),
            StatusFilter::Only(TaskStatus::InProgress)
        );
    }
}
