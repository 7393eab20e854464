mod process;

pub use process::*;

use std::path::Path;

use anyhow::Result;

use crate::configuration::FormatterConfig;
use crate::configuration::ImportOrderConfig;
use crate::configuration::LineEnding;

/// Virtual path handed to the import sorter. The text never comes from a
/// real file, but the engine wants a Java file name for parsing.
pub const VIRTUAL_FILE_NAME: &str = "Source.java";

#[derive(Debug, PartialEq, Eq)]
pub enum SortOutcome {
  Changed(Vec<u8>),
  Unchanged,
}

/// External engine that groups, sorts and deduplicates import statements.
pub trait ImportSorter {
  fn sort_imports(&self, config: &ImportOrderConfig, path: &Path, file_bytes: &[u8]) -> Result<SortOutcome>;
}

/// External engine that formats Java source text.
pub trait JavaFormatter {
  /// Returns `Ok(None)` when the engine reports no changes.
  fn format_text(&self, config: &FormatterConfig, file_text: &str, line_ending: LineEnding) -> Result<Option<String>>;
}
