#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

#[macro_use]
mod environment;

mod arg_parser;
mod configuration;
mod engines;
mod format;
mod run_cli;
mod utils;

#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use arg_parser::parse_args;
use engines::ProcessImportSorter;
use engines::ProcessJavaFormatter;
use environment::RealEnvironment;
use utils::RealStdInReader;

fn main() {
  match run() {
    Ok(()) => {}
    Err(err) => {
      #[allow(clippy::print_stderr)]
      {
        eprintln!("{:?}", err);
      }
      std::process::exit(1);
    }
  }
}

fn run() -> Result<()> {
  let args = parse_args(std::env::args().collect(), RealStdInReader)?;
  let environment = RealEnvironment::new(args.verbose);
  let sorter = ProcessImportSorter::resolve(&environment)?;
  let formatter = ProcessJavaFormatter::resolve(&environment)?;
  run_cli::run_cli(args, &environment, &sorter, &formatter)
}
