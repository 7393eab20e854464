mod command;
mod file_text;
mod stdin_reader;

pub use command::*;
pub use file_text::*;
pub use stdin_reader::*;
