use std::path::Path;

use crate::error::{Error, Result};
use crate::remove::{Deleter, FsDeleter, Outcome};

use super::prompts::Prompt;

/// Deletion mode accumulated from the leading option blocks.
///
/// `forced` and `interactive` are mutually exclusive; setting either clears
/// the other, last write wins. `recursive` is sticky once set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    pub recursive: bool,
    pub interactive: bool,
    pub forced: bool,
}

/// Splits the raw argument list into a deletion mode and the target paths.
///
/// Leading tokens starting with '-' are option blocks; parsing stops at the
/// first bare token, and everything from there on is a target even if it
/// starts with '-'.
pub fn parse_args(args: &[String]) -> (Mode, &[String]) {
    let mut mode = Mode::default();
    for (i, arg) in args.iter().enumerate() {
        if !arg.starts_with('-') {
            return (mode, &args[i..]);
        }
        parse_option(&mut mode, arg);
    }
    (mode, &[])
}

fn parse_option(mode: &mut Mode, block: &str) {
    for c in block.chars().skip(1) {
        match c {
            'f' => {
                mode.forced = true;
                mode.interactive = false;
            }
            'i' => {
                mode.interactive = true;
                mode.forced = false;
            }
            'r' | 'R' => mode.recursive = true,
            // Unrecognized option characters are silently ignored.
            _ => {}
        }
    }
}

/// Top-level driver: parses the arguments and deletes every target in order.
///
/// Targets are handled independently; one failure never prevents attempting
/// the rest. With force on, failures neither print nor affect the outcome.
pub fn run(args: &[String]) -> Result<()> {
    let (mode, targets) = parse_args(args);
    log::debug!("run mode={:?} targets={}", mode, targets.len());

    if targets.is_empty() {
        // "remove -f" with no targets is allowed.
        if mode.forced {
            return Ok(());
        }
        return Err(Error::InvalidSyntax);
    }

    let mut deleter = FsDeleter::new(mode, Prompt::console());
    let mut failed_paths = Vec::new();

    for target in targets {
        match deleter.delete(Path::new(target)) {
            Outcome::Failed(err) if !mode.forced => {
                eprintln!("remove: failed to delete '{target}': {err}");
                failed_paths.push(target.clone());
            }
            _ => {}
        }
    }

    if failed_paths.is_empty() {
        Ok(())
    } else {
        Err(Error::PartialDeletion { failed_paths })
    }
}
