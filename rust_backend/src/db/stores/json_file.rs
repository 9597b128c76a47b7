//! Directory-of-JSON-documents store.
//!
//! Each record is one pretty-printed file, `<root>/<key>.json`. Writes go to a
//! hidden temp file first and are renamed into place, so a reader never sees a
//! half-written record. Enumeration is in key order.

use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::db::store::{ScheduleStore, StoreError, StoreResult};
use crate::models::Schedule;

const RECORD_EXTENSION: &str = "json";

/// File-backed store rooted at a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `root`, creating the directory now.
    pub async fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self::new(root);
        fs::create_dir_all(&store.root)
            .await
            .map_err(|e| StoreError::io(&store.root, e))?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, RECORD_EXTENSION)))
    }

    /// Record files currently on disk, sorted by file name.
    async fn record_files(&self) -> StoreResult<Vec<PathBuf>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.root, e)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&self.root, e))?
        {
            let path = entry.path();
            if is_record_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_record_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));
    !hidden && path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
}

/// Keys become file names; anything that could escape the root is refused.
fn validate_key(key: &str) -> StoreResult<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains("..")
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ScheduleStore for JsonFileStore {
    async fn health_check(&self) -> StoreResult<bool> {
        match fs::metadata(&self.root).await {
            Ok(meta) => Ok(meta.is_dir()),
            // Created lazily on first write.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(StoreError::io(&self.root, e)),
        }
    }

    async fn write(&self, key: &str, record: &Schedule) -> StoreResult<()> {
        let path = self.record_path(key)?;
        let tmp = self.root.join(format!(".{}.{}.tmp", key, RECORD_EXTENSION));
        let body = serde_json::to_vec_pretty(record)?;

        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;
        fs::write(&tmp, body)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(&path, e))?;

        debug!("json store: wrote {}", path.display());
        Ok(())
    }

    async fn read_all(&self) -> StoreResult<Vec<Schedule>> {
        let files = self.record_files().await?;
        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let bytes = fs::read(&path)
                .await
                .map_err(|e| StoreError::io(&path, e))?;
            let record: Schedule = serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Serialization(format!("{}: {}", path.display(), e))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .record_files()
            .await?
            .iter()
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()))
            .map(str::to_string)
            .collect())
    }

    async fn clear(&self) -> StoreResult<()> {
        let files = self.record_files().await?;
        let removed = files.len();
        for path in files {
            fs::remove_file(&path)
                .await
                .map_err(|e| StoreError::io(&path, e))?;
        }
        debug!("json store: removed {} records from {}", removed, self.root.display());
        Ok(())
    }
}
