//! One JSON file per board.

use super::{BoardStore, BoardSummary, StorageError, StorageResult, check_id, check_loaded, sort_summaries};
use crate::canvas::SavedBoard;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores boards as `<id>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl FileStorage {
    /// Use `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(io_error(&dir))?;
        Ok(Self { dir })
    }

    /// The per-user data directory, e.g. `~/.local/share/tacticboard/boards`.
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir().or_else(dirs::home_dir).ok_or_else(|| StorageError::Io {
            path: PathBuf::from("~"),
            source: io::Error::new(io::ErrorKind::NotFound, "no home directory"),
        })?;
        Self::new(base.join("tacticboard").join("boards"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> StorageResult<PathBuf> {
        check_id(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }
}

impl BoardStore for FileStorage {
    fn save(&self, board: &SavedBoard) -> StorageResult<()> {
        let path = self.path_for(&board.id)?;
        let json = serde_json::to_string_pretty(board)?;

        // Write beside the target, then swap it in.
        let partial = path.with_extension("json.partial");
        fs::write(&partial, json).map_err(io_error(&partial))?;
        fs::rename(&partial, &path).map_err(io_error(&path))?;
        log::debug!("Saved board {} ({} objects) to {}", board.id, board.scene.len(), path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<SavedBoard> {
        let path = self.path_for(id)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StorageError::NotFound(id.to_string())),
            Err(e) => return Err(io_error(&path)(e)),
        };
        let board = serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        check_loaded(id, board)
    }

    fn remove(&self, id: &str) -> StorageResult<bool> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn list(&self) -> StorageResult<Vec<BoardSummary>> {
        let entries = fs::read_dir(&self.dir).map_err(io_error(&self.dir))?;
        let mut summaries = Vec::new();
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load(id) {
                Ok(board) => summaries.push(BoardSummary::from(&board)),
                Err(e) => log::warn!("Skipping {}: {e}", path.display()),
            }
        }
        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}
