//! Recursive directory copy used to materialize content into the output tree.
//!
//! The copy is a depth-first pre-order walk: each destination directory is
//! created before its children are visited. Existing destination files are
//! overwritten and files that only exist at the destination are left alone.
//! Symlinks are followed; whatever `stat` reports for an entry decides how
//! it is copied.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Totals for a finished copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

/// Copy the directory `src` and everything below it to `dst`.
///
/// Directories are created with the permission bits of their source
/// directory, files get their source's permission bits after writing.
/// Fails with [`Error::Copy`] naming the offending path if `src` is missing
/// or anything cannot be read, created, or written.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<CopyStats> {
    let metadata = fs::metadata(src).map_err(|e| Error::copy(src, e))?;
    if !metadata.is_dir() {
        return Err(Error::Copy {
            path: src.display().to_string(),
            message: "not a directory".to_string(),
        });
    }

    let mut stats = CopyStats::default();
    create_dir_with_permissions(dst, &metadata.permissions())?;
    stats.directories += 1;

    // Pre-order with links followed: a directory is yielded before its
    // children, and each entry is typed by what its target is.
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::Copy {
            path: e.path().unwrap_or(src).display().to_string(),
            message: e.to_string(),
        })?;
        let src_path = entry.path();
        let relative = src_path.strip_prefix(src).map_err(|_| Error::Copy {
            path: src_path.display().to_string(),
            message: format!("not below {}", src.display()),
        })?;
        let dst_path = dst.join(relative);

        if entry.file_type().is_dir() {
            let permissions = entry
                .metadata()
                .map_err(|e| Error::Copy {
                    path: src_path.display().to_string(),
                    message: e.to_string(),
                })?
                .permissions();
            create_dir_with_permissions(&dst_path, &permissions)?;
            stats.directories += 1;
        } else {
            stats.bytes += copy_file(src_path, &dst_path)?;
            stats.files += 1;
        }
    }

    Ok(stats)
}

/// Copy a single file's bytes and permission bits, returning the bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    debug!("Copying file: src={} dst={}", src.display(), dst.display());

    let bytes = fs::copy(src, dst).map_err(|e| Error::copy(src, e))?;
    let permissions = fs::metadata(src)
        .map_err(|e| Error::copy(src, e))?
        .permissions();
    fs::set_permissions(dst, permissions).map_err(|e| Error::copy(dst, e))?;

    Ok(bytes)
}

/// Create `dir` and any missing parents if needed.
///
/// On Unix, newly created directories get the mode of `permissions`
/// (filtered by the process umask); an existing directory keeps its mode.
fn create_dir_with_permissions(dir: &Path, permissions: &fs::Permissions) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
        builder.mode(permissions.mode());
    }
    #[cfg(not(unix))]
    let _ = permissions;

    builder.create(dir).map_err(|e| Error::copy(dir, e))
}
