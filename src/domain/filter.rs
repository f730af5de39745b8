use crate::{
    domain::{
        board::{BoardState, Columns},
        task::{Task, TaskStatus},
    },
    error::Result,
};
use std::str::FromStr;

/// Text and stage filter applied to board views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title and description
    pub query: String,
    /// Only tasks with this status, when set
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn new(query: impl Into<String>, status: Option<TaskStatus>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Builds a filter from raw form values, where an empty status means
    /// "any stage"
    pub fn from_input(query: &str, status: &str) -> Result<Self> {
        let status = match status.trim() {
            "" => None,
            s => Some(TaskStatus::from_str(s)?),
        };
        Ok(Self::new(query, status))
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status.is_some()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self.status.map_or(true, |status| task.status == status);
        status_matches && task.matches_text(&self.query)
    }
}

impl BoardState {
    /// Tasks across all columns, in board order, that match the query and
    /// optional status
    pub fn filtered_tasks(&self, query: &str, status: Option<TaskStatus>) -> Vec<&Task> {
        let filter = TaskFilter::new(query, status);
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// The board with every column narrowed to the tasks matching `filter`
    pub fn filtered_columns(&self, filter: &TaskFilter) -> Columns {
        let mut columns = self.columns.clone();
        if filter.is_active() {
            for status in TaskStatus::ALL {
                columns.get_mut(status).tasks.retain(|task| filter.matches(task));
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;
    use crate::error::BoardError;

    fn sample_board() -> BoardState {
        let mut board = BoardState::default();
        board.add_task("Buy milk", "", Priority::High);
        let clean = board.add_task("Clean kitchen", "Wipe the MILK spill", Priority::Low);
        let report = board.add_task("Write report", "", Priority::Medium);
        board.move_task(&clean, TaskStatus::Done);
        board.move_task(&report, TaskStatus::InProgress);
        board
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_filter_by_title() {
        let mut board = BoardState::default();
        board.add_task("Buy milk", "", Priority::High);
        board.add_task("Clean kitchen", "", Priority::Low);

        let results = board.filtered_tasks("milk", None);
        assert_eq!(titles(&results), vec!["Buy milk"]);
    }

    #[test]
    fn test_filter_matches_description_case_insensitive() {
        let board = sample_board();

        let results = board.filtered_tasks("Milk", None);
        assert_eq!(titles(&results), vec!["Buy milk", "Clean kitchen"]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let board = sample_board();
        assert_eq!(board.filtered_tasks("", None).len(), 3);
    }

    #[test]
    fn test_filter_by_status() {
        let board = sample_board();

        let results = board.filtered_tasks("", Some(TaskStatus::InProgress));
        assert_eq!(titles(&results), vec!["Write report"]);

        let results = board.filtered_tasks("milk", Some(TaskStatus::Done));
        assert_eq!(titles(&results), vec!["Clean kitchen"]);

        assert!(board.filtered_tasks("report", Some(TaskStatus::Done)).is_empty());
    }

    #[test]
    fn test_filter_from_input() {
        let filter = TaskFilter::from_input("milk", "").unwrap();
        assert_eq!(filter.status, None);

        let filter = TaskFilter::from_input("", "in-progress").unwrap();
        assert_eq!(filter.status, Some(TaskStatus::InProgress));
        assert!(filter.is_active());

        assert!(matches!(
            TaskFilter::from_input("", "archived"),
            Err(BoardError::InvalidStatus(_))
        ));
        assert!(!TaskFilter::default().is_active());
    }

    #[test]
    fn test_filtered_columns_keep_shape() {
        let board = sample_board();

        let columns = board.filtered_columns(&TaskFilter::new("milk", None));
        assert_eq!(columns.pending.tasks.len(), 1);
        assert!(columns.in_progress.tasks.is_empty());
        assert_eq!(columns.done.tasks.len(), 1);
        assert_eq!(columns.done.title, "Done");

        let unfiltered = board.filtered_columns(&TaskFilter::default());
        assert_eq!(unfiltered, board.columns);
    }
}
