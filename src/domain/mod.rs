pub mod board;
pub mod drag;
pub mod filter;
pub mod sorting;
pub mod task;

pub use board::{BoardState, Column, ColumnSummary, ColumnTitles, Columns};
pub use drag::{DragLocation, DragResult};
pub use filter::TaskFilter;
pub use sorting::{is_priority_sorted, sort_by_priority};
pub use task::{normalize_title, Priority, Task, TaskId, TaskStatus, TaskUpdate};
