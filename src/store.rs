//! The board store: owns the current [`BoardState`] and writes it to a
//! [`Storage`] slot after every change.

use crate::{
    config::StoreConfig,
    domain::{
        BoardState, Columns, DragResult, Priority, Task, TaskFilter, TaskId, TaskStatus,
        TaskUpdate,
    },
    error::Result,
    storage::{FileStorage, Storage},
};
use std::path::Path;
use tracing::{debug, error, warn};

pub struct BoardStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    state: BoardState,
    save_failures: usize,
    /// False while the slot could not be read; saving then would overwrite
    /// data this store never saw
    slot_read: bool,
}

impl BoardStore<FileStorage> {
    /// Opens the board kept under `project_root`, reading
    /// `<project_root>/.taskboard/config.toml` if present
    pub async fn open_project(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        let config = StoreConfig::load(project_root.join(StoreConfig::DEFAULT_DATA_DIR)).await?;
        let storage = FileStorage::new(project_root.join(&config.data_dir));
        Ok(Self::open(storage, config).await)
    }
}

impl<S: Storage> BoardStore<S> {
    /// Restores the board from storage. A missing, unreadable or malformed
    /// slot yields an empty board.
    ///
    /// If the slot cannot be read at all, automatic saves are suspended
    /// until a later [`reload`](Self::reload) succeeds, so the unread data
    /// is not overwritten.
    pub async fn open(storage: S, config: StoreConfig) -> Self {
        let (state, slot_read) = Self::load_state(&storage, &config).await;
        Self {
            storage,
            config,
            state,
            save_failures: 0,
            slot_read,
        }
    }

    /// Returns the restored board and whether the slot could be read
    async fn load_state(storage: &S, config: &StoreConfig) -> (BoardState, bool) {
        let empty = || BoardState::with_titles(&config.column_titles);
        let key = config.storage_key.as_str();

        let contents = match storage.get(key).await {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(key, "No saved board, starting empty");
                return (empty(), true);
            }
            Err(e) => {
                warn!(key, error = %e, "Could not read saved board, saves suspended");
                return (empty(), false);
            }
        };

        match BoardState::from_json(&contents) {
            Ok(state) => {
                debug!(key, tasks = state.task_count(), "Board restored");
                (state, true)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed saved board");
                (empty(), true)
            }
        }
    }

    /// Current board snapshot
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Owned copy of the current board; later mutations never affect it
    pub fn snapshot(&self) -> BoardState {
        self.state.clone()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Number of saves that failed or were suspended since the store was
    /// opened
    pub fn save_failures(&self) -> usize {
        self.save_failures
    }

    /// Whether changes are currently written to storage
    pub fn is_saving(&self) -> bool {
        self.slot_read
    }

    pub async fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> TaskId {
        let mut next = self.state.clone();
        let id = next.add_task(title, description, priority);
        self.commit(next).await;
        id
    }

    pub async fn update_task(&mut self, id: &TaskId, update: &TaskUpdate) -> bool {
        self.apply(|board| board.update_task(id, update)).await
    }

    pub async fn move_task(&mut self, id: &TaskId, new_status: TaskStatus) -> bool {
        self.apply(|board| board.move_task(id, new_status)).await
    }

    pub async fn delete_task(&mut self, id: &TaskId) -> bool {
        self.apply(|board| board.delete_task(id)).await
    }

    pub async fn reorder_task(&mut self, column: TaskStatus, from: usize, to: usize) -> bool {
        self.apply(|board| board.reorder_task(column, from, to)).await
    }

    pub async fn apply_drag(&mut self, drag: &DragResult) -> bool {
        self.apply(|board| board.apply_drag(drag)).await
    }

    pub fn filtered_tasks(&self, query: &str, status: Option<TaskStatus>) -> Vec<&Task> {
        self.state.filtered_tasks(query, status)
    }

    pub fn filtered_columns(&self, filter: &TaskFilter) -> Columns {
        self.state.filtered_columns(filter)
    }

    pub fn tasks_in_progress(&self) -> &[Task] {
        self.state.tasks_in_progress()
    }

    /// Re-reads the board from storage, discarding in-memory changes
    pub async fn reload(&mut self) {
        let (state, slot_read) = Self::load_state(&self.storage, &self.config).await;
        self.state = state;
        self.slot_read = slot_read;
    }

    /// Replaces the board with an empty one and saves it
    pub async fn reset(&mut self) {
        let empty = BoardState::with_titles(&self.config.column_titles);
        self.commit(empty).await;
    }

    /// Writes the current board to its slot, even while automatic saves are
    /// suspended
    pub async fn save(&self) -> Result<()> {
        let json = self.state.to_json()?;
        self.storage.set(&self.config.storage_key, &json).await
    }

    /// Runs `op` against a copy of the board and commits the copy only if
    /// `op` reports a change
    async fn apply(&mut self, op: impl FnOnce(&mut BoardState) -> bool) -> bool {
        let mut next = self.state.clone();
        let changed = op(&mut next);
        if changed {
            self.commit(next).await;
        }
        changed
    }

    async fn commit(&mut self, next: BoardState) {
        self.state = next;
        if !self.slot_read {
            self.save_failures += 1;
            warn!(
                key = %self.config.storage_key,
                "Saved board was never read, not overwriting it"
            );
            return;
        }
        if let Err(e) = self.save().await {
            self.save_failures += 1;
            error!(
                key = %self.config.storage_key,
                error = %e,
                "Failed to save board, keeping in-memory state"
            );
        }
    }
}
