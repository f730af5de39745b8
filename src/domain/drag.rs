use crate::domain::{
    board::BoardState,
    task::{TaskId, TaskStatus},
};
use serde::{Deserialize, Serialize};

/// A column and index reported by a drag-and-drop layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: TaskStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// Outcome of a finished drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub task_id: TaskId,
    pub source: DragLocation,
    /// `None` when the task was dropped outside any column
    pub destination: Option<DragLocation>,
}

impl BoardState {
    /// Turns a drop into a reorder (same column) or a move (other column).
    /// Drops outside a column or back onto the same slot change nothing.
    pub fn apply_drag(&mut self, drag: &DragResult) -> bool {
        let Some(destination) = drag.destination else {
            return false;
        };

        if destination == drag.source {
            return false;
        }

        if destination.column == drag.source.column {
            self.reorder_task(destination.column, drag.source.index, destination.index)
        } else {
            self.move_task(&drag.task_id, destination.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    #[test]
    fn test_drop_outside_is_noop() {
        let mut board = BoardState::default();
        let id = board.add_task("a", "", Priority::Medium);
        let before = board.clone();

        let drag = DragResult {
            task_id: id,
            source: DragLocation::new(TaskStatus::Pending, 0),
            destination: None,
        };

        assert!(!board.apply_drag(&drag));
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_on_same_slot_is_noop() {
        let mut board = BoardState::default();
        let id = board.add_task("a", "", Priority::Medium);
        let before = board.clone();

        let location = DragLocation::new(TaskStatus::Pending, 0);
        let drag = DragResult {
            task_id: id,
            source: location,
            destination: Some(location),
        };

        assert!(!board.apply_drag(&drag));
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_in_same_column_reorders() {
        let mut board = BoardState::default();
        board.add_task("a", "", Priority::Medium);
        let b = board.add_task("b", "", Priority::Medium);

        let drag = DragResult {
            task_id: b.clone(),
            source: DragLocation::new(TaskStatus::Pending, 1),
            destination: Some(DragLocation::new(TaskStatus::Pending, 0)),
        };

        assert!(board.apply_drag(&drag));
        assert_eq!(board.column(TaskStatus::Pending).tasks[0].id, b);
    }

    #[test]
    fn test_drop_in_other_column_moves() {
        let mut board = BoardState::default();
        let id = board.add_task("a", "", Priority::Medium);

        let drag = DragResult {
            task_id: id.clone(),
            source: DragLocation::new(TaskStatus::Pending, 0),
            destination: Some(DragLocation::new(TaskStatus::Done, 0)),
        };

        assert!(board.apply_drag(&drag));
        assert_eq!(board.column_of(&id), Some(TaskStatus::Done));
        assert_eq!(board.find_task(&id).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn test_drag_result_deserializes() {
        let json = r#"{
            "taskId": "abc",
            "source": { "column": "pending", "index": 2 },
            "destination": { "column": "in-progress", "index": 0 }
        }"#;

        let drag: DragResult = serde_json::from_str(json).unwrap();
        assert_eq!(drag.task_id.as_str(), "abc");
        assert_eq!(drag.source.index, 2);
        assert_eq!(
            drag.destination,
            Some(DragLocation::new(TaskStatus::InProgress, 0))
        );
    }
}
