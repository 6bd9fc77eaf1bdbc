// crates/region_store/src/lib.rs

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Reads and writes whole text files.
pub trait TextStore {
    /// Returns the full contents of `path` decoded as UTF-8.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replaces the contents of `path` with `contents`.
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;
}

/// `TextStore` backed by the local filesystem.
///
/// Writes go through a temporary file in the destination directory that is
/// renamed over the target, so a failed write leaves the old file intact.
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display()))?;
        debug!(path = %path.display(), bytes = contents.len(), "read text file");
        Ok(contents)
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        // Write through symlinks to the file they point at.
        let target = match fs::canonicalize(path) {
            Ok(real) => real,
            Err(err) if err.kind() == ErrorKind::NotFound => path.to_path_buf(),
            Err(err) => {
                return Err(err).with_context(|| format!("Error resolving {}", path.display()))
            }
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

        let mut builder = Builder::new();
        // New files get the usual 0666 minus umask instead of 0600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if existing.is_none() {
                builder.permissions(fs::Permissions::from_mode(0o666));
            }
        }
        let mut tmp = builder
            .tempfile_in(dir)
            .with_context(|| format!("Error creating temporary file in {}", dir.display()))?;
        tmp.write_all(contents.as_bytes())
            .with_context(|| format!("Error writing temporary file for {}", path.display()))?;

        // Keep the permissions of the file being replaced.
        if let Some(permissions) = existing {
            fs::set_permissions(tmp.path(), permissions).with_context(|| {
                format!("Error copying permissions of {}", path.display())
            })?;
        }

        tmp.persist(&target)
            .map_err(|e| anyhow!("Error writing file {}: {}", path.display(), e.error))?;
        debug!(path = %target.display(), bytes = contents.len(), "wrote text file");
        Ok(())
    }
}

/// Reads `path` with the default filesystem store.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FsTextStore.read_text(path.as_ref())
}

/// Writes `contents` to `path` with the default filesystem store.
pub fn write_text_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    FsTextStore.write_text(path.as_ref(), contents)
}
