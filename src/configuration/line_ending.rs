use serde::Deserialize;
use serde::Serialize;

/// Line ending policy handed to the engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  /// Decide based on the line endings found in the text.
  Auto,
  /// Leave whatever line endings the text already has.
  Keep,
  Lf,
  Crlf,
  Cr,
}

impl LineEnding {
  /// Resolves `Auto` against the given text; any other policy is returned as-is.
  pub fn resolve(self, file_text: &str) -> LineEnding {
    match self {
      LineEnding::Auto => detect_line_ending(file_text),
      other => other,
    }
  }
}

/// Picks the most frequent line ending in the text. Ties and texts
/// without any line ending resolve to `Lf`.
fn detect_line_ending(file_text: &str) -> LineEnding {
  let mut lf_count = 0usize;
  let mut crlf_count = 0usize;
  let mut cr_count = 0usize;
  let bytes = file_text.as_bytes();
  let mut index = 0;
  while index < bytes.len() {
    match bytes[index] {
      b'\r' => {
        if bytes.get(index + 1) == Some(&b'\n') {
          crlf_count += 1;
          index += 1;
        } else {
          cr_count += 1;
        }
      }
      b'\n' => lf_count += 1,
      _ => {}
    }
    index += 1;
  }

  if crlf_count > lf_count && crlf_count > cr_count {
    LineEnding::Crlf
  } else if cr_count > lf_count && cr_count > crlf_count {
    LineEnding::Cr
  } else {
    LineEnding::Lf
  }
}
