//! Flat-directory file store. The filename is the only key; the atomic
//! create-new open is the duplicate check.

use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::AppError;
use crate::models::file::FileEntry;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Keys must stay inside the root directory.
    fn resolve(&self, name: &str) -> Result<PathBuf, AppError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(AppError::BadRequest("Invalid filename".to_string()));
        }
        Ok(self.root.join(name))
    }

    pub async fn save(&self, name: &str, data: &[u8]) -> Result<(), AppError> {
        let path = self.resolve(name)?;
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(AppError::FileExists(name.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(data).await?;
        file.flush().await?;
        tracing::debug!(name, bytes = data.len(), "stored file");
        Ok(())
    }

    /// Enumerates regular files only, computed from disk state at call time.
    pub async fn list(&self) -> Result<Vec<FileEntry>, AppError> {
        let mut dir = fs::read_dir(&self.root).await?;
        let mut files = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let meta = entry.metadata().await?;
            if !meta.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_owned())
                .unwrap_or_default();
            files.push(FileEntry {
                size: format!("{:.2} KB", meta.len() as f64 / 1024.0),
                name,
                kind,
            });
        }
        Ok(files)
    }

    /// Opens a stored file for streaming; also returns its length so the
    /// response can carry Content-Length.
    pub async fn open(&self, name: &str) -> Result<(fs::File, u64), AppError> {
        let path = self.resolve(name)?;
        let file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::FileNotFound(name.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        let len = file.metadata().await?.len();
        Ok((file, len))
    }

    pub async fn remove(&self, name: &str) -> Result<(), AppError> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::FileNotFound(name.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (FileStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn save_then_duplicate_then_delete_then_save_again() {
        let (store, _dir) = store().await;
        store.save("a.txt", b"hello").await.unwrap();
        assert!(matches!(
            store.save("a.txt", b"other").await,
            Err(AppError::FileExists(_))
        ));
        store.remove("a.txt").await.unwrap();
        store.save("a.txt", b"fresh").await.unwrap();
    }

    #[tokio::test]
    async fn open_and_remove_missing_file_are_not_found() {
        let (store, _dir) = store().await;
        assert!(matches!(
            store.open("ghost.pdf").await,
            Err(AppError::FileNotFound(_))
        ));
        assert!(matches!(
            store.remove("ghost.pdf").await,
            Err(AppError::FileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_reports_size_and_extension() {
        let (store, _dir) = store().await;
        store.save("notes.txt", &[0u8; 2048]).await.unwrap();
        store.save("README", b"x").await.unwrap();

        let mut entries = store.list().await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[0].kind, "");
        assert_eq!(entries[1].name, "notes.txt");
        assert_eq!(entries[1].size, "2.00 KB");
        assert_eq!(entries[1].kind, "txt");
    }

    #[tokio::test]
    async fn list_skips_directories() {
        let (store, dir) = store().await;
        tokio::fs::create_dir(dir.path().join("subdir")).await.unwrap();
        store.save("a.txt", b"hello").await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.txt");
    }

    #[tokio::test]
    async fn path_escapes_are_rejected() {
        let (store, _dir) = store().await;
        for name in ["", "../etc/passwd", "a/b.txt", "..", "a\\b"] {
            assert!(matches!(
                store.save(name, b"x").await,
                Err(AppError::BadRequest(_))
            ));
        }
    }
}
