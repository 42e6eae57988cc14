pub mod entry;
pub mod prompts;

pub use entry::{Mode, parse_args, run};
pub use prompts::Prompt;
