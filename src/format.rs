use std::borrow::Cow;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;

use crate::configuration::FormatConfig;
use crate::engines::ImportSorter;
use crate::engines::JavaFormatter;
use crate::engines::SortOutcome;
use crate::engines::VIRTUAL_FILE_NAME;

/// Runs the text through the import sorter then the formatter. A no-change
/// signal from either engine passes the text through unmodified.
pub fn format_text(
  config: &FormatConfig,
  sorter: &impl ImportSorter,
  formatter: &impl JavaFormatter,
  file_text: &str,
) -> Result<String> {
  let sort_outcome = sorter
    .sort_imports(&config.import_order, Path::new(VIRTUAL_FILE_NAME), file_text.as_bytes())
    .context("Error sorting imports")?;
  let sorted_text = match sort_outcome {
    SortOutcome::Changed(bytes) => Cow::Owned(String::from_utf8(bytes).context("The import sorter returned invalid UTF-8")?),
    SortOutcome::Unchanged => Cow::Borrowed(file_text),
  };

  let formatted_text = formatter
    .format_text(&config.formatter, &sorted_text, config.line_ending)
    .context("Error formatting")?;
  Ok(match formatted_text {
    Some(formatted_text) => formatted_text,
    None => sorted_text.into_owned(),
  })
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use crate::configuration::FormatConfig;
  use crate::test_helpers::FakeImportSorter;
  use crate::test_helpers::FakeJavaFormatter;

  use super::*;

  #[test]
  fn formats_the_sorted_text() {
    let config = FormatConfig::bundled().unwrap();
    let sorter = FakeImportSorter::rewriting("sorted");
    let formatter = FakeJavaFormatter::rewriting("formatted");
    let result = format_text(&config, &sorter, &formatter, "original").unwrap();
    assert_eq!(result, "formatted");
    assert_eq!(formatter.seen_texts(), vec!["sorted"]);
  }

  #[test]
  fn sorter_receives_the_virtual_path_and_original_bytes() {
    let config = FormatConfig::bundled().unwrap();
    let sorter = FakeImportSorter::no_change();
    let formatter = FakeJavaFormatter::no_change();
    format_text(&config, &sorter, &formatter, "class A {}").unwrap();
    let requests = sorter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, Path::new("Source.java").to_path_buf());
    assert_eq!(requests[0].1, b"class A {}".to_vec());
  }

  #[test]
  fn both_engines_reporting_no_change_passes_the_text_through() {
    let config = FormatConfig::bundled().unwrap();
    let sorter = FakeImportSorter::no_change();
    let formatter = FakeJavaFormatter::no_change();
    let result = format_text(&config, &sorter, &formatter, "class A {}\n").unwrap();
    assert_eq!(result, "class A {}\n");
  }

  #[test]
  fn errors_when_the_sorter_returns_invalid_utf8() {
    let config = FormatConfig::bundled().unwrap();
    let sorter = FakeImportSorter::rewriting_bytes(vec![0xC0, 0x80]);
    let formatter = FakeJavaFormatter::no_change();
    let err = format_text(&config, &sorter, &formatter, "class A {}").err().unwrap();
    assert_eq!(err.to_string(), "The import sorter returned invalid UTF-8");
  }
}
