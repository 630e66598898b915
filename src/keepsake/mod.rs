//! Keepsake export of the revealed letter.
//!
//! When enabled, the letter is written once per session to
//! `<recipient>_<date>.txt` in the configured directory (default:
//! `~/.local/share/xmascard/cards/`). An existing file for the same day gets
//! a numeric suffix instead of being overwritten.

use crate::assets::expand_home;
use crate::config::KeepsakeConfig;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Highest numeric suffix tried before giving up.
const MAX_SUFFIX: u32 = 999;

pub struct Keepsake {
    enabled: bool,
    dir: PathBuf,
}

impl Keepsake {
    pub fn new(config: &KeepsakeConfig) -> Self {
        Self {
            enabled: config.enabled,
            dir: expand_home(Path::new(&config.dir)),
        }
    }

    /// Write the letter. Returns the file written, or `None` when disabled.
    pub fn save(&self, recipient: &str, letter: &str) -> Result<Option<PathBuf>> {
        if !self.enabled {
            return Ok(None);
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create keepsake directory {}", self.dir.display()))?;

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let path = free_path(&self.dir, &safe_stem(recipient), &date, MAX_SUFFIX)?;
        fs::write(&path, letter)
            .with_context(|| format!("Failed to write keepsake to {}", path.display()))?;
        tracing::info!(path = %path.display(), "keepsake saved");
        Ok(Some(path))
    }
}

/// Filename-safe version of a recipient name.
pub fn safe_stem(recipient: &str) -> String {
    let stem: String = recipient
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "card".to_string()
    } else {
        stem
    }
}

fn free_path(dir: &Path, stem: &str, date: &str, max_suffix: u32) -> Result<PathBuf> {
    let first = dir.join(format!("{}_{}.txt", stem, date));
    if !first.exists() {
        return Ok(first);
    }
    match (1..=max_suffix)
        .map(|i| dir.join(format!("{}_{}_{}.txt", stem, date, i)))
        .find(|p| !p.exists())
    {
        Some(path) => Ok(path),
        None => bail!(
            "No free keepsake file name left for {} in {}",
            stem,
            dir.display()
        ),
    }
}
