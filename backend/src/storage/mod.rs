//! File Registry - Store uploaded project files on disk
//!
//! Each file is kept as two entries in the registry directory:
//! `<id>.json` with its metadata and `<id>.bin` with its content.
//! Opening scans the directory synchronously; per-request reads and writes
//! go through `tokio::fs`.

use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::StoredFile;

/// Directory where files are stored (relative to current dir)
pub const DEFAULT_DATA_DIR: &str = ".projectfiles/files";

/// Registry of stored files across all projects
pub struct FileRegistry {
    /// Directory where files are stored
    dir: PathBuf,
    /// Loaded metadata (id -> file)
    files: HashMap<String, StoredFile>,
}

impl FileRegistry {
    /// Open a registry, creating the directory and loading existing files
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = PathBuf::from(dir.as_ref());
        fs::create_dir_all(&dir)?;

        let mut registry = Self {
            dir,
            files: HashMap::new(),
        };
        registry.load_all();
        Ok(registry)
    }

    /// Load all metadata files whose content is present
    fn load_all(&mut self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(_) => return,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                let Ok(content) = fs::read_to_string(&path) else {
                    continue;
                };
                match serde_json::from_str::<StoredFile>(&content) {
                    Ok(file) if self.content_path(&file.id).exists() => {
                        self.files.insert(file.id.clone(), file);
                    }
                    Ok(file) => tracing::warn!("⚠️ Content missing for {}, skipped", file.id),
                    Err(e) => tracing::warn!("⚠️ Unreadable metadata {}: {}", path.display(), e),
                }
            }
        }

        tracing::debug!("📂 Loaded {} stored file(s)", self.files.len());
    }

    fn meta_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn content_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.bin", id))
    }

    /// Files of a project, oldest first (ties broken by name)
    pub fn list(&self, project_id: &str) -> Vec<&StoredFile> {
        let mut files: Vec<_> = self
            .files
            .values()
            .filter(|f| f.project_id == project_id)
            .collect();
        files.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        files
    }

    /// Get a file by ID
    pub fn get(&self, id: &str) -> Option<&StoredFile> {
        self.files.get(id)
    }

    /// Content of a file
    pub async fn content(&self, id: &str) -> StoreResult<Vec<u8>> {
        if !self.files.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(tokio::fs::read(self.content_path(id)).await?)
    }

    /// Store a new file and return its metadata
    pub async fn insert(
        &mut self,
        project_id: &str,
        name: &str,
        mime_type: Option<String>,
        bytes: &[u8],
    ) -> StoreResult<StoredFile> {
        let file = StoredFile {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            name: name.to_string(),
            mime_type,
            size: bytes.len() as u64,
            created_at: Utc::now(),
        };

        tokio::fs::write(self.content_path(&file.id), bytes).await?;
        tokio::fs::write(self.meta_path(&file.id), serde_json::to_string_pretty(&file)?).await?;
        self.files.insert(file.id.clone(), file.clone());

        tracing::debug!("💾 Stored {} ({} bytes) as {}", file.name, file.size, file.id);
        Ok(file)
    }

    /// Delete a file
    pub async fn remove(&mut self, id: &str) -> StoreResult<StoredFile> {
        let file = self
            .files
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        for path in [self.meta_path(id), self.content_path(id)] {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    return Err(e.into());
                }
            }
        }

        Ok(file)
    }

    /// Number of stored files, all projects included
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
