use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::path::Path;

/// Per-entry confirmation prompt for interactive deletion.
///
/// Generic over its streams so tests can drive it with in-memory buffers
/// while the binary wires it to stdin/stderr.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stderr> {
    pub fn console() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks whether `path` should be deleted and reads one line of input.
    ///
    /// Only a line whose first character is 'y' or 'Y' confirms. The whole
    /// line is consumed either way, so a following prompt never sees
    /// leftover characters. EOF or a read error counts as a decline.
    pub fn confirm(&mut self, path: &Path) -> bool {
        let _ = write!(
            self.output,
            "remove: Do you really want to delete '{}' (y/N)? ",
            path.display()
        );
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => false,
            Ok(_) => matches!(line.chars().next(), Some('y' | 'Y')),
            Err(_) => false,
        }
    }
}
