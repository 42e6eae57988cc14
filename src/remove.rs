use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::{Mode, Prompt};
use crate::error::Error;

/// Per-target result of a deletion attempt.
#[derive(Debug)]
pub enum Outcome {
    Deleted,
    /// Interactive decline; the target was left untouched. Not a failure.
    Skipped,
    Failed(Error),
}

pub trait Deleter {
    fn delete(&mut self, path: &Path) -> Outcome;
}

/// Deletes local filesystem entries, descending into directories when the
/// mode permits.
pub struct FsDeleter<R, W> {
    mode: Mode,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> FsDeleter<R, W> {
    pub fn new(mode: Mode, prompt: Prompt<R, W>) -> Self {
        Self { mode, prompt }
    }

    /// Classifies `path` and dispatches to unlink or recursive descent.
    ///
    /// Symbolic links are never followed: a link to a directory is unlinked
    /// like any other non-directory entry. In interactive mode the user is
    /// asked before anything touches the filesystem, including the metadata
    /// query.
    fn delete_entry(&mut self, path: &Path) -> Outcome {
        if self.mode.interactive && !self.prompt.confirm(path) {
            return Outcome::Skipped;
        }

        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(source) => {
                return Outcome::Failed(Error::Metadata {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if meta.is_dir() {
            if self.mode.recursive {
                self.delete_dir(path)
            } else {
                Outcome::Failed(Error::DirectoryNotRecursive {
                    path: path.to_path_buf(),
                })
            }
        } else {
            match fs::remove_file(path) {
                Ok(()) => Outcome::Deleted,
                Err(source) => Outcome::Failed(Error::Unlink {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        }
    }

    /// Deletes a directory's contents, then the directory itself.
    ///
    /// Any child failure marks the whole directory failed; the first error
    /// encountered is the one reported. Skipped children are not failures,
    /// but they leave the directory non-empty, so its own removal fails and
    /// that failure becomes the outcome.
    fn delete_dir(&mut self, dir: &Path) -> Outcome {
        log::debug!("delete_dir path={}", dir.display());

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                return Outcome::Failed(Error::OpenDirectory {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        let mut failed: Option<Error> = None;
        for entry in entries {
            match entry {
                Ok(entry) => {
                    if let Outcome::Failed(err) = self.delete_entry(&entry.path()) {
                        failed.get_or_insert(err);
                    }
                }
                Err(source) => {
                    failed.get_or_insert(Error::ReadDirectory {
                        path: dir.to_path_buf(),
                        source,
                    });
                    break;
                }
            }
        }

        // The directory itself goes last, whether or not a child failed.
        let removed = fs::remove_dir(dir);

        if let Some(err) = failed {
            return Outcome::Failed(err);
        }
        match removed {
            Ok(()) => Outcome::Deleted,
            Err(source) => Outcome::Failed(Error::RemoveDirectory {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

impl<R: BufRead, W: Write> Deleter for FsDeleter<R, W> {
    fn delete(&mut self, path: &Path) -> Outcome {
        self.delete_entry(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn deleter(mode: Mode, input: &str) -> FsDeleter<Cursor<Vec<u8>>, Vec<u8>> {
        FsDeleter::new(
            mode,
            Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
        )
    }

    fn recursive() -> Mode {
        Mode {
            recursive: true,
            ..Mode::default()
        }
    }

    #[test]
    fn deletes_a_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, b"content").unwrap();

        let outcome = deleter(Mode::default(), "").delete(&file);
        assert!(matches!(outcome, Outcome::Deleted));
        assert!(!file.exists());
    }

    #[test]
    fn missing_path_is_a_metadata_failure() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let outcome = deleter(Mode::default(), "").delete(&missing);
        match outcome {
            Outcome::Failed(Error::Metadata { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Metadata failure, got {other:?}"),
        }
    }

    #[test]
    fn directory_without_recursive_flag_fails_and_survives() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let outcome = deleter(Mode::default(), "").delete(&sub);
        assert!(matches!(
            outcome,
            Outcome::Failed(Error::DirectoryNotRecursive { .. })
        ));
        assert!(sub.is_dir());
    }

    #[test]
    fn recursively_deletes_a_populated_tree() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::write(root.join("a.txt"), b"a").unwrap();
        fs::write(root.join("nested/b.txt"), b"b").unwrap();
        fs::write(root.join("nested/deeper/c.txt"), b"c").unwrap();

        let outcome = deleter(recursive(), "").delete(&root);
        assert!(matches!(outcome, Outcome::Deleted));
        assert!(!root.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_a_directory_is_unlinked_not_followed() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let outcome = deleter(recursive(), "").delete(&link);
        assert!(matches!(outcome, Outcome::Deleted));
        assert!(link.symlink_metadata().is_err());
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn interactive_decline_skips_without_touching_the_target() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("keep.txt");
        fs::write(&file, b"keep").unwrap();

        let mode = Mode {
            interactive: true,
            ..Mode::default()
        };
        let outcome = deleter(mode, "n\n").delete(&file);
        assert!(matches!(outcome, Outcome::Skipped));
        assert!(file.exists());
    }

    #[test]
    fn interactive_accept_deletes_the_target() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("gone.txt");
        fs::write(&file, b"gone").unwrap();

        let mode = Mode {
            interactive: true,
            ..Mode::default()
        };
        let outcome = deleter(mode, "y\n").delete(&file);
        assert!(matches!(outcome, Outcome::Deleted));
        assert!(!file.exists());
    }

    // Pins the walker's aggregation policy: a skipped child is not itself a
    // failure, but the directory cannot be removed around it, and that
    // removal failure is the directory's outcome.
    #[test]
    fn declined_child_leaves_directory_and_fails_its_removal() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        let file = root.join("precious.txt");
        fs::write(&file, b"precious").unwrap();

        let mode = Mode {
            recursive: true,
            interactive: true,
            ..Mode::default()
        };
        // Confirm the directory, decline the file inside it.
        let outcome = deleter(mode, "y\nn\n").delete(&root);
        assert!(matches!(
            outcome,
            Outcome::Failed(Error::RemoveDirectory { .. })
        ));
        assert!(file.exists());
        assert!(root.is_dir());
    }

    #[test]
    fn recursively_deletes_an_empty_directory() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir(&empty).unwrap();

        let outcome = deleter(recursive(), "").delete(&empty);
        assert!(matches!(outcome, Outcome::Deleted));
        assert!(!empty.exists());
    }
}
