//! Append-only JSON lines result store.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::StoredResult;

use super::ResultStore;

/// Stores one JSON object per line in a single file.
///
/// Reads and writes are serialised through a mutex so a reader never sees
/// half of a line being appended. A missing file reads as an empty store.
///
/// A final line without a trailing newline is a torn append from a crash.
/// Reads skip it when it does not decode, and the next save trims it off
/// before appending.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is created on the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> EngineResult<MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|_| EngineError::StorageError {
            message: "file store lock poisoned".to_string(),
        })
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> EngineError {
        EngineError::StorageError {
            message: format!("failed to {} {}: {}", action, self.path.display(), err),
        }
    }

    /// Makes sure the file ends with a newline before a row is appended.
    ///
    /// A decodable tail only lost its newline and gets one back. Anything
    /// else after the last newline is cut off.
    fn repair_tail(&self, file: &mut File) -> EngineResult<()> {
        let len = file
            .metadata()
            .map_err(|e| self.storage_error("inspect", e))?
            .len();
        if len == 0 {
            return Ok(());
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| self.storage_error("read", e))?;
        if last[0] == b'\n' {
            return Ok(());
        }

        let mut content = Vec::new();
        file.seek(SeekFrom::Start(0))
            .and_then(|_| file.read_to_end(&mut content))
            .map_err(|e| self.storage_error("read", e))?;
        let tail_start = content
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |pos| pos + 1);

        if serde_json::from_slice::<StoredResult>(&content[tail_start..]).is_ok() {
            return file
                .write_all(b"\n")
                .map_err(|e| self.storage_error("write", e));
        }

        warn!(
            path = %self.path.display(),
            bytes = content.len() - tail_start,
            "Discarding torn row at end of result file"
        );
        file.set_len(tail_start as u64)
            .map_err(|e| self.storage_error("truncate", e))
    }
}

impl ResultStore for FileStore {
    fn save(&self, result: StoredResult) -> EngineResult<()> {
        let mut line =
            serde_json::to_string(&result).map_err(|e| self.storage_error("encode row for", e))?;
        line.push('\n');

        let _guard = self.guard()?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage_error("open", e))?;
        self.repair_tail(&mut file)?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.storage_error("write", e))
    }

    fn load_all(&self) -> EngineResult<Vec<StoredResult>> {
        let _guard = self.guard()?;

        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("open", e)),
        };
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| self.storage_error("read", e))?;

        let complete = content.ends_with(b"\n");
        let lines: Vec<&[u8]> = content.split(|b| *b == b'\n').collect();
        let last_index = lines.len().saturating_sub(1);

        let mut results = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice(line) {
                Ok(result) => results.push(result),
                Err(e) if index == last_index && !complete => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "Skipping torn row at end of result file"
                    );
                }
                Err(e) => {
                    return Err(self.storage_error(&format!("decode line {} of", index + 1), e));
                }
            }
        }
        Ok(results)
    }
}
