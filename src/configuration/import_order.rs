use serde::Serialize;

use super::LanguageLevel;
use super::LineEnding;

/// Configuration handed to the import sorting engine. The values are fixed
/// for every run; there is no way to override them from the command line.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrderConfig {
  /// Comma separated group prefixes in the order they should appear.
  pub groups: String,
  /// Group specification for static imports.
  pub static_groups: String,
  pub static_after: bool,
  pub join_static_with_non_static: bool,
  pub breadth_first_comparator: bool,
  pub remove_unused: bool,
  pub treat_same_package_as_unused: bool,
  pub line_ending: LineEnding,
  pub language_level: LanguageLevel,
  pub encoding: String,
}

impl Default for ImportOrderConfig {
  fn default() -> Self {
    ImportOrderConfig {
      groups: String::from("java.,javax.,org.,com."),
      static_groups: String::from("*"),
      static_after: false,
      join_static_with_non_static: false,
      breadth_first_comparator: false,
      remove_unused: true,
      treat_same_package_as_unused: true,
      line_ending: LineEnding::Auto,
      language_level: LanguageLevel::Java { version: 8, preview: false },
      encoding: String::from("UTF-8"),
    }
  }
}
