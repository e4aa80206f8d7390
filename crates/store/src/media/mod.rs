//! Avatar storage abstraction
//!
//! Uploaded avatars are filed under a date-partitioned namespace,
//! `avatar/YYYY/MM/DD/<stem>_<id>.<ext>`, and referenced from the profile by
//! that relative path. The id makes every stored name unique, so two uploads
//! of `me.png` never share a file. Profiles without an upload point at the
//! default image.

use crate::config::MediaConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Attempts at finding a free name before giving up
const STORE_ATTEMPTS: usize = 3;

/// Trait for the file storage service holding avatar images
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Store an uploaded image and return the reference to save on the profile
    async fn store(&self, date: NaiveDate, file_name: &str, bytes: &[u8]) -> Result<String>;

    /// Delete a stored image. Unknown references and the default image are ignored
    async fn remove(&self, reference: &str) -> Result<()>;

    /// Reference used when no image was uploaded
    fn default_avatar(&self) -> &str;
}

/// Relative path an upload is stored under
///
/// Only the final component of `file_name` is kept, so client supplied
/// directories never leak into the namespace. `id` is appended to the stem,
/// keeping the extension last.
pub fn avatar_path(date: NaiveDate, file_name: &str, id: Uuid) -> Result<String> {
    let path = Path::new(file_name);
    let stem = path
        .file_name()
        .filter(|n| !n.is_empty())
        .and_then(|_| path.file_stem())
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::validation("avatar", format!("invalid file name: {:?}", file_name)))?;

    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, id.simple(), ext),
        None => format!("{}_{}", stem, id.simple()),
    };

    Ok(format!("avatar/{}/{}", date.format("%Y/%m/%d"), name))
}

/// Avatar storage on the local filesystem under a media root
pub struct LocalAvatarStorage {
    root: PathBuf,
    default_avatar: String,
}

impl LocalAvatarStorage {
    pub fn new(root: impl Into<PathBuf>, default_avatar: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_avatar: default_avatar.into(),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(config.root.clone(), config.default_avatar.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    async fn store(&self, date: NaiveDate, file_name: &str, bytes: &[u8]) -> Result<String> {
        for _ in 0..STORE_ATTEMPTS {
            let reference = avatar_path(date, file_name, Uuid::now_v7())?;
            let full_path = self.root.join(&reference);

            if let Some(parent) = full_path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            // create_new: an existing file is never overwritten
            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&full_path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = write_all(&mut file, bytes).await {
                let _ = tokio::fs::remove_file(&full_path).await;
                return Err(e.into());
            }

            tracing::debug!(path = %full_path.display(), size = bytes.len(), "Avatar stored");
            return Ok(reference);
        }

        Err(AppError::Storage {
            message: format!("no free name for avatar upload {:?}", file_name),
        })
    }

    async fn remove(&self, reference: &str) -> Result<()> {
        if reference == self.default_avatar {
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(reference)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn default_avatar(&self) -> &str {
        &self.default_avatar
    }
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

#[cfg(test)]
pub(crate) fn scratch_storage() -> LocalAvatarStorage {
    let root = std::env::temp_dir().join(format!("askboard-media-{}", uuid::Uuid::new_v4()));
    LocalAvatarStorage::new(root, crate::DEFAULT_AVATAR)
}
