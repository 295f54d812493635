//! Filesystem-backed storage for rental images.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Image content types accepted for rental pictures.
const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Errors from the image store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("only JPG, PNG or JPEG images are accepted")]
    UnsupportedFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes uploaded images under a base directory and addresses them by
/// public URL.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    base_url: String,
}

impl ImageStore {
    /// Create a store rooted at `dir`, serving files under `base_url`.
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            dir: dir.into(),
            base_url,
        }
    }

    /// Save an uploaded image and return its public URL.
    ///
    /// The stored name is prefixed with a UUIDv7 so concurrent uploads with
    /// the same original filename cannot clobber each other.
    pub async fn save(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        if !ACCEPTED_TYPES.contains(&content_type) {
            return Err(StorageError::UnsupportedFormat);
        }

        let stored_name = format!("{}-{}", Uuid::now_v7(), sanitize(filename));
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&stored_name), bytes).await?;

        info!(name = %stored_name, "rental image saved");
        Ok(format!("{}{}", self.base_url, stored_name))
    }

    /// Directory the images live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Replace path separators in a client-supplied filename so the stored
/// name can never escape the image directory.
fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), "http://localhost:3200/images");

        let url = store
            .save("flat.jpg", "image/jpeg", b"fake-jpeg-bytes")
            .await
            .unwrap();
        assert!(url.starts_with("http://localhost:3200/images/"));
        assert!(url.ends_with("-flat.jpg"));

        let name = url.rsplit('/').next().unwrap();
        let on_disk = std::fs::read(dir.path().join(name)).unwrap();
        assert_eq!(b"fake-jpeg-bytes".as_slice(), on_disk.as_slice());
    }

    #[tokio::test]
    async fn unsupported_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), "http://localhost/images/");

        let err = store
            .save("anim.gif", "image/gif", b"GIF89a")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedFormat));
        assert_eq!(0, std::fs::read_dir(dir.path()).unwrap().count());
    }

    #[tokio::test]
    async fn path_separators_are_neutralized() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), "http://localhost/images/");

        store
            .save("../../etc/passwd", "image/png", b"png")
            .await
            .unwrap();

        // The file must land inside the store directory, nowhere else.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(1, entries.len());
        assert!(entries[0].ends_with("etc_passwd"));
    }
}
