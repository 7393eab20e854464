use anyhow::Context;
use anyhow::Result;
use thiserror::Error;

use crate::utils::strip_bom;
use crate::utils::StdInReader;

pub struct CliArgs {
  /// The Java source text to run through the engines.
  pub file_text: String,
  pub verbose: bool,
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseArgsError(#[from] anyhow::Error);

pub fn parse_args<TStdInReader: StdInReader>(args: Vec<String>, std_in_reader: TStdInReader) -> Result<CliArgs, ParseArgsError> {
  inner_parse_args(args, std_in_reader).map_err(ParseArgsError)
}

fn inner_parse_args<TStdInReader: StdInReader>(args: Vec<String>, std_in_reader: TStdInReader) -> Result<CliArgs> {
  let cli_parser = create_cli_parser();
  let matches = match cli_parser.try_get_matches_from(args) {
    Ok(matches) => matches,
    Err(err) => match err.kind() {
      // let clap print help and version on stdout with a zero exit status
      clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => err.exit(),
      _ => return Err(err.into()),
    },
  };

  // an argument takes precedence; stdin is not consulted when one exists
  let file_text = match matches.get_one::<String>("code").map(String::from) {
    Some(text) => text,
    None => {
      let bytes = std_in_reader.read().context("Error reading stdin")?;
      String::from_utf8(strip_bom(&bytes).to_vec()).context("Error decoding stdin as UTF-8")?
    }
  };

  Ok(CliArgs {
    file_text,
    verbose: matches.get_flag("verbose"),
  })
}

pub fn create_cli_parser() -> clap::Command {
  use clap::Arg;
  use clap::Command;

  Command::new("jcatfmt")
    .bin_name("jcatfmt")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Sorts imports and formats Java source text, writing the result to stdout.")
    .override_usage("jcatfmt [OPTIONS] [code]")
    .after_help(
      r#"ENVIRONMENT VARIABLES:
  JCATFMT_IMPSORT_CMD  Command that launches the import sorting engine
                       (default: jcat-impsort).
  JCATFMT_FORMAT_CMD   Command that launches the code formatting engine
                       (default: jcat-javaformat).

EXAMPLES:
  Format a file from stdin:

    jcatfmt < MyClass.java

  Format source text provided as an argument:

    jcatfmt "class MyClass {}""#,
    )
    .arg(
      Arg::new("code")
        .help("Java source text to format. When omitted, the text is read from stdin.")
        .required(false)
        .num_args(1),
    )
    .arg(
      Arg::new("verbose")
        .long("verbose")
        .help("Prints additional diagnostic information.")
        .num_args(0),
    )
}
