//! # Taskboard Core
//!
//! State engine for a personal three-stage task board.
//!
//! This crate owns the task collection, keeps every column sorted by
//! priority, moves tasks between the `pending`, `in-progress` and `done`
//! stages, and persists the whole board to a key-value slot after every
//! change. Rendering, drag gestures and forms live elsewhere and talk to the
//! [`BoardStore`].

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    board::{BoardState, Column, ColumnTitles, Columns},
    drag::{DragLocation, DragResult},
    filter::TaskFilter,
    task::{Priority, Task, TaskId, TaskStatus, TaskUpdate},
};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
