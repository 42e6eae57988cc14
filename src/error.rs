use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Cannot query '{}': {source}", path.display()))]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Cannot delete directory without -r flag: {}", path.display()))]
    DirectoryNotRecursive { path: PathBuf },

    #[snafu(display("Cannot unlink '{}': {source}", path.display()))]
    Unlink {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Cannot open directory '{}': {source}", path.display()))]
    OpenDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Cannot enumerate directory '{}': {source}", path.display()))]
    ReadDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Cannot remove directory '{}': {source}", path.display()))]
    RemoveDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display(
        "Invalid syntax.\n\nSyntax is:\nremove [-iRr] file...\nremove -f [-iRr] [file...]"
    ))]
    InvalidSyntax,

    #[snafu(display("Partial deletion failure: {} path(s) failed to delete", failed_paths.len()))]
    PartialDeletion { failed_paths: Vec<String> },
}
