mod config_reader;
mod import_order;
mod language_level;
mod line_ending;

pub use config_reader::*;
pub use import_order::*;
pub use language_level::*;
pub use line_ending::*;

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use indexmap::IndexMap;

pub const BUNDLED_CONFIG_FILE_NAME: &str = "jcat-code-formatter.xml";

const COMPILER_COMPLIANCE: &str = "1.8";

const BUNDLED_CONFIG_TEXT: &str = include_str!("../../resources/jcat-code-formatter.xml");

/// Configuration handed to the code formatting engine.
#[derive(Clone, Debug)]
pub struct FormatterConfig {
  /// Flat option bag read from the bundled resource. Its schema is owned
  /// by the formatting engine.
  pub options: IndexMap<String, String>,
  pub compiler_source: String,
  pub compiler_compliance: String,
  pub compiler_target_platform: String,
  pub target_directory: Option<PathBuf>,
  pub encoding: String,
}

/// Everything one run needs. Built once at start-up and passed along
/// explicitly; there is no global mutable state.
#[derive(Clone, Debug)]
pub struct FormatConfig {
  pub import_order: ImportOrderConfig,
  pub formatter: FormatterConfig,
  pub line_ending: LineEnding,
}

impl FormatConfig {
  pub fn bundled() -> Result<FormatConfig> {
    let options = read_config(BUNDLED_CONFIG_TEXT).with_context(|| format!("Error reading {}", BUNDLED_CONFIG_FILE_NAME))?;
    Ok(FormatConfig {
      import_order: ImportOrderConfig {
        language_level: LanguageLevel::from_compliance(COMPILER_COMPLIANCE)?,
        ..Default::default()
      },
      formatter: FormatterConfig {
        options,
        compiler_source: String::from(COMPILER_COMPLIANCE),
        compiler_compliance: String::from(COMPILER_COMPLIANCE),
        compiler_target_platform: String::from(COMPILER_COMPLIANCE),
        target_directory: None,
        encoding: String::from("UTF-8"),
      },
      line_ending: LineEnding::Auto,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_config_parses() {
    let config = FormatConfig::bundled().unwrap();
    assert!(!config.formatter.options.is_empty());
    assert_eq!(
      config.formatter.options.get("org.eclipse.jdt.core.formatter.tabulation.char").map(String::as_str),
      Some("space")
    );
    assert_eq!(config.formatter.compiler_compliance, "1.8");
    assert_eq!(config.import_order.language_level.to_string(), "JAVA_8");
    assert_eq!(config.line_ending, LineEnding::Auto);
  }
}
