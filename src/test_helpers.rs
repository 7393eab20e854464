use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::Result;
use parking_lot::Mutex;

use crate::configuration::FormatterConfig;
use crate::configuration::ImportOrderConfig;
use crate::configuration::LineEnding;
use crate::engines::ImportSorter;
use crate::engines::JavaFormatter;
use crate::engines::SortOutcome;

#[derive(Clone, Default)]
pub struct FakeImportSorter {
  sorted_bytes: Option<Vec<u8>>,
  error_message: Option<String>,
  requests: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>>,
}

impl FakeImportSorter {
  pub fn no_change() -> Self {
    Default::default()
  }

  pub fn rewriting(text: &str) -> Self {
    Self::rewriting_bytes(text.as_bytes().to_vec())
  }

  pub fn rewriting_bytes(bytes: Vec<u8>) -> Self {
    FakeImportSorter {
      sorted_bytes: Some(bytes),
      ..Default::default()
    }
  }

  pub fn failing(message: &str) -> Self {
    FakeImportSorter {
      error_message: Some(message.to_string()),
      ..Default::default()
    }
  }

  pub fn requests(&self) -> Vec<(PathBuf, Vec<u8>)> {
    self.requests.lock().clone()
  }
}

impl ImportSorter for FakeImportSorter {
  fn sort_imports(&self, _config: &ImportOrderConfig, path: &Path, file_bytes: &[u8]) -> Result<SortOutcome> {
    self.requests.lock().push((path.to_path_buf(), file_bytes.to_vec()));
    if let Some(message) = &self.error_message {
      return Err(anyhow!("{}", message));
    }
    Ok(match &self.sorted_bytes {
      Some(bytes) => SortOutcome::Changed(bytes.clone()),
      None => SortOutcome::Unchanged,
    })
  }
}

#[derive(Clone, Default)]
pub struct FakeJavaFormatter {
  formatted_text: Option<String>,
  error_message: Option<String>,
  requests: Arc<Mutex<Vec<(String, LineEnding)>>>,
}

impl FakeJavaFormatter {
  pub fn no_change() -> Self {
    Default::default()
  }

  pub fn rewriting(text: &str) -> Self {
    FakeJavaFormatter {
      formatted_text: Some(text.to_string()),
      ..Default::default()
    }
  }

  pub fn failing(message: &str) -> Self {
    FakeJavaFormatter {
      error_message: Some(message.to_string()),
      ..Default::default()
    }
  }

  pub fn seen_texts(&self) -> Vec<String> {
    self.requests.lock().iter().map(|(text, _)| text.clone()).collect()
  }

  pub fn seen_line_endings(&self) -> Vec<LineEnding> {
    self.requests.lock().iter().map(|(_, line_ending)| *line_ending).collect()
  }
}

impl JavaFormatter for FakeJavaFormatter {
  fn format_text(&self, _config: &FormatterConfig, file_text: &str, line_ending: LineEnding) -> Result<Option<String>> {
    self.requests.lock().push((file_text.to_string(), line_ending));
    if let Some(message) = &self.error_message {
      return Err(anyhow!("{}", message));
    }
    Ok(self.formatted_text.clone())
  }
}
