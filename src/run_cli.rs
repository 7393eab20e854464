use anyhow::Result;

use crate::arg_parser::CliArgs;
use crate::configuration::FormatConfig;
use crate::engines::ImportSorter;
use crate::engines::JavaFormatter;
use crate::environment::Environment;
use crate::format::format_text;

pub fn run_cli<TEnvironment: Environment>(
  args: CliArgs,
  environment: &TEnvironment,
  sorter: &impl ImportSorter,
  formatter: &impl JavaFormatter,
) -> Result<()> {
  let config = FormatConfig::bundled()?;
  log_verbose!(environment, "Formatting {} bytes of source text.", args.file_text.len());
  let result = format_text(&config, sorter, formatter, &args.file_text)?;
  environment.output(&result);
  Ok(())
}
