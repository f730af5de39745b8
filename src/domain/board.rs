use crate::{
    domain::{
        sorting::{is_priority_sorted, sort_by_priority},
        task::{Priority, Task, TaskId, TaskStatus, TaskUpdate},
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Display titles for the three stage columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ColumnTitles {
    pub pending: String,
    pub in_progress: String,
    pub done: String,
}

impl ColumnTitles {
    pub fn get(&self, status: TaskStatus) -> &str {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

impl Default for ColumnTitles {
    fn default() -> Self {
        Self {
            pending: TaskStatus::Pending.default_title().to_string(),
            in_progress: TaskStatus::InProgress.default_title().to_string(),
            done: TaskStatus::Done.default_title().to_string(),
        }
    }
}

/// One stage column and its priority-ordered tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: TaskStatus,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: TaskStatus, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    fn sort(&mut self) {
        sort_by_priority(&mut self.tasks);
    }
}

/// The three columns keyed by stage identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    pub pending: Column,
    #[serde(rename = "in-progress")]
    pub in_progress: Column,
    pub done: Column,
}

impl Columns {
    pub fn get(&self, status: TaskStatus) -> &Column {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn get_mut(&mut self, status: TaskStatus) -> &mut Column {
        match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Columns in board order: pending, in-progress, done
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        [&self.pending, &self.in_progress, &self.done].into_iter()
    }
}

/// Task count of a single column, for headers and progress counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub id: TaskStatus,
    pub title: String,
    pub count: usize,
}

/// Full board state, the unit of persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub columns: Columns,
}

impl BoardState {
    /// Creates an empty board with the given column titles
    pub fn with_titles(titles: &ColumnTitles) -> Self {
        let column = |status: TaskStatus| Column::new(status, titles.get(status));
        Self {
            columns: Columns {
                pending: column(TaskStatus::Pending),
                in_progress: column(TaskStatus::InProgress),
                done: column(TaskStatus::Done),
            },
        }
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        self.columns.get(status)
    }

    /// Looks up a task in any column
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .find(|task| &task.id == id)
    }

    /// Returns the stage whose column holds the task
    pub fn column_of(&self, id: &TaskId) -> Option<TaskStatus> {
        self.locate(id).map(|(status, _)| status)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// The in-progress column's tasks
    pub fn tasks_in_progress(&self) -> &[Task] {
        &self.columns.in_progress.tasks
    }

    pub fn summary(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .map(|column| ColumnSummary {
                id: column.id,
                title: column.title.clone(),
                count: column.len(),
            })
            .collect()
    }

    fn locate(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        TaskStatus::ALL.into_iter().find_map(|status| {
            self.columns
                .get(status)
                .position(id)
                .map(|index| (status, index))
        })
    }

    /// Adds a new pending task and returns its id.
    ///
    /// The title is taken as given; see [`crate::domain::task::normalize_title`].
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> TaskId {
        let task = Task::new(title, description, priority);
        let id = task.id.clone();

        let pending = self.columns.get_mut(TaskStatus::Pending);
        pending.tasks.push(task);
        pending.sort();

        debug!(task_id = %id, priority = %priority, "Task added");
        id
    }

    /// Merges `update` into the task. Returns `false` if the id is unknown.
    ///
    /// A `status` in the update is carried out as a move, so the task always
    /// ends up in the column its status names.
    pub fn update_task(&mut self, id: &TaskId, update: &TaskUpdate) -> bool {
        let Some((status, index)) = self.locate(id) else {
            debug!(task_id = %id, "Update ignored, task not found");
            return false;
        };

        let column = self.columns.get_mut(status);
        column.tasks[index].merge(update);
        column.sort();

        match update.status {
            Some(target) if target != status => {
                self.move_task(id, target);
            }
            _ => debug!(task_id = %id, "Task updated"),
        }
        true
    }

    /// Moves the task to the end of `new_status`'s column, then re-sorts both
    /// columns. Returns `false` if the id is unknown.
    pub fn move_task(&mut self, id: &TaskId, new_status: TaskStatus) -> bool {
        let Some((from, index)) = self.locate(id) else {
            debug!(task_id = %id, "Move ignored, task not found");
            return false;
        };

        let source = self.columns.get_mut(from);
        let mut task = source.tasks.remove(index);
        source.sort();

        task.set_status(new_status);

        let destination = self.columns.get_mut(new_status);
        destination.tasks.push(task);
        destination.sort();

        debug!(task_id = %id, from = %from, to = %new_status, "Task moved");
        true
    }

    /// Removes the task. Deleting an unknown id is a no-op.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some((status, index)) = self.locate(id) else {
            return false;
        };
        self.columns.get_mut(status).tasks.remove(index);
        debug!(task_id = %id, column = %status, "Task deleted");
        true
    }

    /// Moves the task at `from` to `to` within one column, then re-applies
    /// the priority sort. Out-of-range indices, or `from == to`, leave the
    /// board untouched.
    pub fn reorder_task(&mut self, status: TaskStatus, from: usize, to: usize) -> bool {
        let column = self.columns.get_mut(status);
        let len = column.len();
        if from >= len || to >= len {
            debug!(column = %status, from, to, len, "Reorder ignored, index out of range");
            return false;
        }
        if from == to {
            return false;
        }

        let task = column.tasks.remove(from);
        column.tasks.insert(to, task);
        column.sort();
        true
    }

    /// Checks the structural invariants of a board read from storage
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for status in TaskStatus::ALL {
            let column = self.columns.get(status);
            if column.id != status {
                return Err(BoardError::MalformedState(format!(
                    "column '{}' is stored under '{}'",
                    column.id, status
                )));
            }
            for task in &column.tasks {
                if task.status != status {
                    return Err(BoardError::MalformedState(format!(
                        "task {} has status '{}' but sits in column '{}'",
                        task.id, task.status, status
                    )));
                }
                if !seen.insert(&task.id) {
                    return Err(BoardError::MalformedState(format!(
                        "task {} appears more than once",
                        task.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Whether every column satisfies the priority-order invariant
    pub fn is_sorted(&self) -> bool {
        self.columns.iter().all(|column| is_priority_sorted(&column.tasks))
    }

    /// Serializes the board to its persisted JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a persisted board. Columns that are valid but out
    /// of priority order are re-sorted.
    pub fn from_json(contents: &str) -> Result<Self> {
        let mut board: BoardState = serde_json::from_str(contents)?;
        board.validate()?;
        for status in TaskStatus::ALL {
            board.columns.get_mut(status).sort();
        }
        Ok(board)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::with_titles(&ColumnTitles::default())
    }
}
