//! On-disk storage for uploaded images.
//!
//! [`ImageStore`] applies the [`UploadPolicy`] to incoming files, writes
//! accepted ones under the upload directory and removes replaced or
//! orphaned files. Records only ever hold the public path returned by
//! [`ImageStore::save`].

use std::io;
use std::path::{Path, PathBuf};

use folio_core::upload::{self, UploadPolicy};

use crate::forms::UploadedFile;

/// Writes and removes image files under a single directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    policy: UploadPolicy,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, policy: UploadPolicy) -> Self {
        Self {
            dir: dir.into(),
            policy,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Persist `file` if the policy accepts it.
    ///
    /// Returns `Ok(None)` when there is no usable image (no file name, empty
    /// body, or a rejected extension); that is not an error. On success the
    /// returned string is the path to store on the record.
    pub async fn save(&self, file: &UploadedFile) -> io::Result<Option<String>> {
        let Some(original) = file.file_name.as_deref() else {
            return Ok(None);
        };
        if file.data.is_empty() {
            return Ok(None);
        }
        let Some(stored_name) = self.policy.stored_name(original, chrono::Utc::now()) else {
            tracing::debug!(file_name = %original, "Rejected image upload");
            return Ok(None);
        };

        self.ensure_dir().await?;
        tokio::fs::write(self.dir.join(&stored_name), &file.data).await?;

        let path = upload::public_path(&stored_name);
        tracing::info!(%path, bytes = file.data.len(), "Stored image");
        Ok(Some(path))
    }

    /// Best-effort removal of a stored image.
    ///
    /// A missing file is not an error, and other failures are only logged:
    /// callers never fail a request because an old image could not be
    /// removed. Paths that do not point into the upload directory are
    /// ignored.
    pub async fn remove(&self, public_path: &str) {
        let Some(file) = self.resolve(public_path) else {
            tracing::warn!(path = %public_path, "Refusing to remove image outside upload directory");
            return;
        };
        match tokio::fs::remove_file(file).await {
            Ok(()) => tracing::info!(path = %public_path, "Removed image"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %public_path, "Image already absent");
            }
            Err(e) => tracing::warn!(path = %public_path, error = %e, "Failed to remove image"),
        }
    }

    /// Filesystem location of a stored public path, if it is one of ours.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        upload::stored_name_from_public_path(public_path).map(|name| self.dir.join(name))
    }

    /// Whether new images can be written: the upload directory exists (or
    /// can be created) and is not read-only.
    pub async fn is_writable(&self) -> bool {
        if let Err(e) = self.ensure_dir().await {
            tracing::warn!(dir = %self.dir.display(), error = %e, "Upload directory unavailable");
            return false;
        }
        match tokio::fs::metadata(&self.dir).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}
