//! Local storage for saved boards.
//!
//! Only the current scene is stored; history starts fresh on load. Boards
//! are keyed by their document id and checked on the way back in, so a
//! damaged file never reaches the editor.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::canvas::SavedBoard;
use std::path::PathBuf;
use thiserror::Error;

/// Longest accepted board id.
const MAX_ID_LEN: usize = 128;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No saved board with id {0}")]
    NotFound(String),
    #[error("Board id {0:?} cannot be used as a storage key")]
    InvalidId(String),
    #[error("Saved board {id} is damaged: {reason}")]
    Corrupt { id: String, reason: String },
    #[error("Failed to encode board: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// What a listing shows about a stored board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    /// Number of objects on the board.
    pub objects: usize,
}

impl From<&SavedBoard> for BoardSummary {
    fn from(board: &SavedBoard) -> Self {
        Self {
            id: board.id.clone(),
            name: board.name.clone(),
            objects: board.scene.len(),
        }
    }
}

/// A place boards can be saved to and restored from.
pub trait BoardStore {
    /// Store `board` under its own id, replacing any earlier version.
    fn save(&self, board: &SavedBoard) -> StorageResult<()>;

    /// Fetch a board by id.
    fn load(&self, id: &str) -> StorageResult<SavedBoard>;

    /// Remove a board. Returns false if there was nothing to remove.
    fn remove(&self, id: &str) -> StorageResult<bool>;

    /// Summaries of every readable board, ordered by name then id.
    fn list(&self) -> StorageResult<Vec<BoardSummary>>;
}

/// Ids are used as file names: ASCII letters, digits, `-` and `_` only.
pub fn check_id(id: &str) -> StorageResult<()> {
    let valid = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(id.to_string()))
    }
}

/// Accept a board read back for `id` only if it is the board asked for and
/// its geometry is usable.
fn check_loaded(id: &str, board: SavedBoard) -> StorageResult<SavedBoard> {
    if board.id != id {
        return Err(StorageError::Corrupt {
            id: id.to_string(),
            reason: format!("stored under a different id ({})", board.id),
        });
    }
    if !board.scene.is_finite() {
        return Err(StorageError::Corrupt {
            id: id.to_string(),
            reason: "non-finite geometry".to_string(),
        });
    }
    Ok(board)
}

fn sort_summaries(summaries: &mut [BoardSummary]) {
    summaries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn board(id: &str) -> SavedBoard {
        SavedBoard {
            id: id.to_string(),
            name: "Board".to_string(),
            scene: Scene::new(),
        }
    }

    #[test]
    fn test_check_id() {
        assert!(check_id("3f1c-set_piece").is_ok());
        for bad in ["", "drill/1", "../etc", "set piece", "ü"] {
            assert!(matches!(check_id(bad), Err(StorageError::InvalidId(_))), "{bad:?}");
        }
        assert!(check_id(&"a".repeat(MAX_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_check_loaded_rejects_wrong_id() {
        let result = check_loaded("a", board("b"));
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
        assert!(check_loaded("a", board("a")).is_ok());
    }

    #[test]
    fn test_check_loaded_rejects_non_finite_geometry() {
        use crate::shapes::{Ball, ObjectId, SceneObject};
        use kurbo::Point;

        let mut saved = board("a");
        saved.scene = Scene::from_objects(vec![SceneObject::Ball(Ball::new(
            ObjectId(u64::MAX),
            Point::new(f64::NAN, 1.0),
            2.0,
        ))]);
        assert!(matches!(check_loaded("a", saved), Err(StorageError::Corrupt { .. })));
    }
}
