//! In-memory board store.

use super::{BoardStore, BoardSummary, StorageError, StorageResult, check_id, check_loaded, sort_summaries};
use crate::canvas::SavedBoard;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Keeps boards for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    boards: RwLock<HashMap<String, SavedBoard>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStore for MemoryStorage {
    fn save(&self, board: &SavedBoard) -> StorageResult<()> {
        check_id(&board.id)?;
        let mut boards = self.boards.write().unwrap_or_else(PoisonError::into_inner);
        boards.insert(board.id.clone(), board.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<SavedBoard> {
        check_id(id)?;
        let boards = self.boards.read().unwrap_or_else(PoisonError::into_inner);
        let board = boards.get(id).cloned().ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        check_loaded(id, board)
    }

    fn remove(&self, id: &str) -> StorageResult<bool> {
        check_id(id)?;
        let mut boards = self.boards.write().unwrap_or_else(PoisonError::into_inner);
        Ok(boards.remove(id).is_some())
    }

    fn list(&self) -> StorageResult<Vec<BoardSummary>> {
        let boards = self.boards.read().unwrap_or_else(PoisonError::into_inner);
        let mut summaries: Vec<BoardSummary> = boards.values().map(BoardSummary::from).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}
