//! Saved generated content

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::files;
use crate::error::{AiWriterError, Result};
use crate::jsonfile::JsonFile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub trait ContentStore {
    fn save(&self, title: &str, content: &str) -> Result<ContentEntry>;

    /// Newest first
    fn list(&self) -> Result<Vec<ContentEntry>>;

    fn get(&self, id: u64) -> Result<ContentEntry>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryDocument {
    next_id: u64,
    entries: Vec<ContentEntry>,
}

/// `library.json` in the config directory
#[derive(Debug, Clone)]
pub struct JsonContentLibrary {
    file: JsonFile,
}

impl JsonContentLibrary {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(files::LIBRARY))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl ContentStore for JsonContentLibrary {
    fn save(&self, title: &str, content: &str) -> Result<ContentEntry> {
        let entry = self.file.update(|doc: &mut LibraryDocument| {
            doc.next_id += 1;
            let now = Utc::now();
            let entry = ContentEntry {
                id: doc.next_id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            };
            doc.entries.push(entry.clone());
            Ok(entry)
        })?;
        tracing::info!(id = entry.id, "content saved to library");
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<ContentEntry>> {
        let doc: LibraryDocument = self.file.read()?;
        let mut entries = doc.entries;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    fn get(&self, id: u64) -> Result<ContentEntry> {
        let doc: LibraryDocument = self.file.read()?;
        doc.entries
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(AiWriterError::ContentNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_library() {
        let temp = TempDir::new().unwrap();
        let library = JsonContentLibrary::in_dir(temp.path());
        assert!(library.list().unwrap().is_empty());
        assert!(!library.path().exists());
    }

    #[test]
    fn test_save_list_get() {
        let temp = TempDir::new().unwrap();
        let library = JsonContentLibrary::in_dir(temp.path());

        let first = library.save("First", "<p>one</p>").unwrap();
        let second = library.save("Second", "<p>two</p>").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);

        let listed = library.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Second");

        assert_eq!(library.get(1).unwrap().content, "<p>one</p>");
    }

    #[test]
    fn test_missing_entry() {
        let temp = TempDir::new().unwrap();
        let library = JsonContentLibrary::in_dir(temp.path());
        library.save("Only", "x").unwrap();

        let err = library.get(5).unwrap_err();
        assert!(matches!(err, AiWriterError::ContentNotFound(5)));
        assert_eq!(err.to_string(), "Content '5' not found");
    }

    #[test]
    fn test_concurrent_saves_keep_every_entry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let library = JsonContentLibrary::at(path);
                    library.save(&format!("Entry {}", n), "body").unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let library = JsonContentLibrary::at(path);
        let mut ids: Vec<u64> = library.list().unwrap().iter().map(|e| e.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
