//! Asset lookup for photos.
//!
//! The card only needs to know whether a file exists, is a regular file of an
//! allowed type, and how large it is. Images are never decoded.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub path: PathBuf,
    pub name: String,
    pub bytes: u64,
}

impl Photo {
    pub fn size_label(&self) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * 1024;
        if self.bytes >= MIB {
            format!("{:.1} MB", self.bytes as f64 / MIB as f64)
        } else if self.bytes >= KIB {
            format!("{} KB", self.bytes / KIB)
        } else {
            format!("{} B", self.bytes)
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{0} does not exist")]
    NotFound(PathBuf),
    #[error("{0} is not a file")]
    NotAFile(PathBuf),
    #[error("{path} is not a supported image (allowed: {allowed})")]
    UnsupportedType { path: PathBuf, allowed: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait AssetStore {
    fn exists(&self, path: &Path) -> bool;
    fn load_photo(&self, path: &Path) -> Result<Photo, AssetError>;
}

/// Filesystem-backed store with an extension allow-list.
pub struct FsAssetStore {
    extensions: Vec<String>,
}

impl FsAssetStore {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    fn allowed(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|a| a.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

impl AssetStore for FsAssetStore {
    fn exists(&self, path: &Path) -> bool {
        expand_home(path).is_file()
    }

    fn load_photo(&self, path: &Path) -> Result<Photo, AssetError> {
        let path = expand_home(path);
        let meta = std::fs::metadata(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(path.clone())
            } else {
                AssetError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        if !meta.is_file() {
            return Err(AssetError::NotAFile(path));
        }
        if !self.allowed(&path) {
            return Err(AssetError::UnsupportedType {
                path,
                allowed: self.extensions.join(", "),
            });
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();
        Ok(Photo {
            path,
            name,
            bytes: meta.len(),
        })
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
