//! Content materialization: overlay a source tree onto the mirror.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TaskError};

/// Recursively copy `source` into `destination`.
///
/// Files that collide by path are overwritten; files present only in the
/// destination are left untouched. This is an overlay, not a
/// mirror-replace.
///
/// # Errors
/// Returns [`TaskError::Overlay`] on any I/O error (missing source,
/// permissions, disk full). The destination may then hold a partial
/// overlay; no rollback is attempted.
pub fn overlay(source: &Path, destination: &Path) -> Result<()> {
    copy_tree(source, destination).map_err(|io_error| TaskError::Overlay {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: io_error,
    })
}

fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tempfile::TempDir;

    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn copies_files_and_nested_directories() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join("docs/deep")).unwrap();
        fs::create_dir(&dst).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("docs/deep/leaf.txt"), "leaf").unwrap();

        overlay(&src, &dst).unwrap();

        assert_eq!(read(&dst.join("top.txt")), "top");
        assert_eq!(read(&dst.join("docs/deep/leaf.txt")), "leaf");
    }

    #[test]
    fn overwrites_colliding_files_and_keeps_destination_only_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();
        // dest {a, b}, source {b, c}
        fs::write(dst.join("a"), "dest a").unwrap();
        fs::write(dst.join("b"), "dest b").unwrap();
        fs::write(src.join("b"), "source b").unwrap();
        fs::write(src.join("c"), "source c").unwrap();

        overlay(&src, &dst).unwrap();

        assert_eq!(read(&dst.join("a")), "dest a");
        assert_eq!(read(&dst.join("b")), "source b");
        assert_eq!(read(&dst.join("c")), "source c");
    }

    #[test]
    fn missing_source_is_an_overlay_failure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("no-such-source");
        let dst = temp.path().join("dst");
        fs::create_dir(&dst).unwrap();

        let err = overlay(&src, &dst).unwrap_err();
        assert!(matches!(err, TaskError::Overlay { .. }));
    }
}
