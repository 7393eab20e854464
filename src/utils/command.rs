use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandParseError {
  #[error("Found zero arguments.")]
  Empty,
  #[error("Unclosed single quote.")]
  UnclosedSingleQuote,
  #[error("Unclosed double quote.")]
  UnclosedDoubleQuote,
}

#[derive(PartialEq, Eq)]
enum QuoteKind {
  None,
  Single,
  Double,
}

/// Splits a command string such as an engine launch command into its
/// program and argument parts using shell-like quoting rules.
pub fn parse_command_line(input: &str) -> Result<Vec<String>, CommandParseError> {
  let mut args = Vec::new();
  let mut current = String::new();
  let mut quote = QuoteKind::None;
  let mut chars = input.chars();

  while let Some(c) = chars.next() {
    match c {
      c if c.is_whitespace() && quote == QuoteKind::None => {
        if !current.is_empty() {
          args.push(std::mem::take(&mut current));
        }
      }
      '\'' if quote != QuoteKind::Double => {
        quote = match quote {
          QuoteKind::None => QuoteKind::Single,
          _ => QuoteKind::None,
        };
      }
      '"' if quote != QuoteKind::Single => {
        quote = match quote {
          QuoteKind::None => QuoteKind::Double,
          _ => QuoteKind::None,
        };
      }
      '\\' if quote != QuoteKind::Single => {
        // escapes the next character; a trailing backslash stays literal
        current.push(chars.next().unwrap_or('\\'));
      }
      _ => current.push(c),
    }
  }

  match quote {
    QuoteKind::Single => return Err(CommandParseError::UnclosedSingleQuote),
    QuoteKind::Double => return Err(CommandParseError::UnclosedDoubleQuote),
    QuoteKind::None => {}
  }

  if !current.is_empty() {
    args.push(current);
  }

  if args.is_empty() {
    Err(CommandParseError::Empty)
  } else {
    Ok(args)
  }
}
