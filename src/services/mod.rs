pub mod pipeline;
pub mod prompt;

pub use pipeline::{default_file_name, DitherJob};
pub use prompt::{ask_choices, run_interactive, PromptAnswers};
