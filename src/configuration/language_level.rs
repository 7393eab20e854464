use std::fmt;

use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Which Java source syntax version the import sorter's parser should target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageLevel {
  /// The parser default when no compliance level is configured.
  Popular,
  /// The 1.0 through 1.4 levels.
  Legacy(u8),
  /// Java 5 and up, optionally a preview level.
  Java { version: u8, preview: bool },
}

const MAX_VERSION: u8 = 21;
const MIN_PREVIEW_VERSION: u8 = 12;

#[derive(Debug, Error)]
#[error("Unsupported Java compliance level '{0}'.")]
pub struct LanguageLevelParseError(String);

impl LanguageLevel {
  /// Derives the language level from a compiler compliance string such as
  /// `1.8`, `11` or `17_preview`. Blank input falls back to the parser default.
  pub fn from_compliance(compliance: &str) -> Result<LanguageLevel, LanguageLevelParseError> {
    let value = compliance.trim();
    if value.is_empty() {
      return Ok(LanguageLevel::Popular);
    }
    // upper case for "PREVIEW" language levels
    let value = value.to_uppercase();
    let err = || LanguageLevelParseError(compliance.to_string());

    if let Some(minor) = value.strip_prefix("1.") {
      let minor: u8 = minor.parse().map_err(|_| err())?;
      return match minor {
        0..=4 => Ok(LanguageLevel::Legacy(minor)),
        5..=9 => Ok(LanguageLevel::Java {
          version: minor,
          preview: false,
        }),
        _ => Err(err()),
      };
    }

    let (version, preview) = match value.strip_suffix("_PREVIEW") {
      Some(version) => (version, true),
      None => (value.as_str(), false),
    };
    let version: u8 = version.parse().map_err(|_| err())?;
    if version < 5 || version > MAX_VERSION || (preview && version < MIN_PREVIEW_VERSION) {
      return Err(err());
    }
    Ok(LanguageLevel::Java { version, preview })
  }
}

impl fmt::Display for LanguageLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LanguageLevel::Popular => write!(f, "POPULAR"),
      LanguageLevel::Legacy(minor) => write!(f, "JAVA_1_{}", minor),
      LanguageLevel::Java { version, preview: false } => write!(f, "JAVA_{}", version),
      LanguageLevel::Java { version, preview: true } => write!(f, "JAVA_{}_PREVIEW", version),
    }
  }
}

impl Serialize for LanguageLevel {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
