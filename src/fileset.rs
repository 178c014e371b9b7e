//! File set enumeration
//!
//! A file set is the ordered list of regular files directly inside one
//! directory. It is built exactly once per directory argument and never
//! mutated afterwards; the dispatcher owns both sets for the duration of
//! a run and indexes into them to enumerate the comparison product.
//!
//! Classification rules:
//! - Only ordinary files are kept. Directories, symlinks, sockets,
//!   FIFOs and device nodes are skipped without error.
//! - Classification uses `symlink_metadata` so a symlink pointing at a
//!   regular file is still excluded.
//! - No recursion into subdirectories.
//! - Entries whose full path exceeds the platform path limit are skipped
//!   with a warning rather than failing the run.

use crate::error::{FilesetError, FilesetResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Upper bound on a usable path length. Matches the conventional Linux
/// PATH_MAX; entries beyond it are skipped with a warning.
pub const MAX_PATH_LEN: usize = 4096;

/// One regular file found during enumeration
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path (directory argument joined with the entry name)
    pub path: PathBuf,

    /// Base file name, used in report lines to keep output legible
    pub name: String,

    /// Size in bytes at enumeration time
    pub size: u64,
}

/// Ordered, immutable collection of regular files from one directory
#[derive(Debug, Clone)]
pub struct FileSet {
    /// Directory the set was built from
    dir: PathBuf,

    /// Entries in directory-iteration order
    entries: Vec<FileEntry>,
}

impl FileSet {
    /// Enumerate the regular files directly inside `dir`.
    ///
    /// Fails with [`FilesetError::DirectoryUnreadable`] if the directory
    /// cannot be opened (missing, not a directory, permission denied).
    /// Non-regular entries are skipped silently; entries that disappear
    /// or become unstattable between listing and classification are
    /// skipped with a debug log, since the race is expected on live
    /// filesystems.
    pub fn collect(dir: &Path) -> FilesetResult<Self> {
        let read_dir = fs::read_dir(dir).map_err(|e| FilesetError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();

        for entry in read_dir {
            let entry = entry.map_err(|e| FilesetError::EntryUnreadable {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })?;

            let path = entry.path();

            if path.as_os_str().len() > MAX_PATH_LEN {
                warn!(path = %path.display(), limit = MAX_PATH_LEN, "Path too long, skipping");
                continue;
            }

            // symlink_metadata does not follow links, so a symlink to a
            // regular file is classified as a symlink and excluded.
            let metadata = match fs::symlink_metadata(&path) {
                Ok(m) => m,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Cannot stat entry, skipping");
                    continue;
                }
            };

            if !metadata.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();

            entries.push(FileEntry {
                path,
                name,
                size: metadata.len(),
            });
        }

        debug!(dir = %dir.display(), files = entries.len(), "File set collected");

        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    /// Directory this set was built from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the directory held no regular files
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Access an entry by index
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }
}

impl std::ops::Index<usize> for FileSet {
    type Output = FileEntry;

    fn index(&self, index: usize) -> &FileEntry {
        &self.entries[index]
    }
}
