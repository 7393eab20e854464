use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::configuration::FormatterConfig;
use crate::configuration::ImportOrderConfig;
use crate::configuration::LineEnding;
use crate::environment::Environment;
use crate::utils::parse_command_line;

use super::ImportSorter;
use super::JavaFormatter;
use super::SortOutcome;

pub const IMPSORT_CMD_ENV_VAR: &str = "JCATFMT_IMPSORT_CMD";
pub const FORMAT_CMD_ENV_VAR: &str = "JCATFMT_FORMAT_CMD";
const DEFAULT_IMPSORT_CMD: &str = "jcat-impsort";
const DEFAULT_FORMAT_CMD: &str = "jcat-javaformat";

/// Launch command for an external engine. The engine receives one JSON
/// request on stdin and answers with the rewritten source text on stdout;
/// a nonzero exit status fails the whole run.
#[derive(Clone, Debug)]
struct EngineCommand {
  engine_name: &'static str,
  program: String,
  args: Vec<String>,
}

impl EngineCommand {
  fn resolve(environment: &impl Environment, engine_name: &'static str, env_var_name: &str, default_program: &str) -> Result<EngineCommand> {
    let command_text = environment.env_var(env_var_name).unwrap_or_else(|| default_program.to_string());
    let mut parts =
      parse_command_line(&command_text).with_context(|| format!("Error parsing {} ('{}')", env_var_name, command_text))?;
    let program = parts.remove(0);
    Ok(EngineCommand {
      engine_name,
      program,
      args: parts,
    })
  }

  fn run(&self, request: &impl Serialize) -> Result<Vec<u8>> {
    let request_json = serde_json::to_vec(request)?;
    let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .with_context(|| format!("Error launching the {} engine ('{}')", self.engine_name, self.program))?;

    // write on a separate thread so a large request can't deadlock
    // against the child filling its stdout pipe
    let mut stdin = child.stdin.take().with_context(|| format!("Error opening stdin of the {} engine", self.engine_name))?;
    let writer = std::thread::spawn(move || stdin.write_all(&request_json));

    let output = child
      .wait_with_output()
      .with_context(|| format!("Error waiting on the {} engine", self.engine_name))?;
    if !output.status.success() {
      bail!(
        "The {} engine failed ({}): {}",
        self.engine_name,
        output.status,
        String::from_utf8_lossy(&output.stderr).trim(),
      );
    }
    match writer.join() {
      Ok(write_result) => write_result.with_context(|| format!("Error writing the request to the {} engine", self.engine_name))?,
      Err(_) => bail!("Error writing the request to the {} engine", self.engine_name),
    }
    Ok(output.stdout)
  }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SortImportsRequest<'a> {
  kind: &'static str,
  config: &'a ImportOrderConfig,
  path: &'a str,
  text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatRequest<'a> {
  kind: &'static str,
  options: &'a IndexMap<String, String>,
  source: SourceLevels<'a>,
  line_ending: LineEnding,
  text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SourceLevels<'a> {
  compiler_source: &'a str,
  compiler_compliance: &'a str,
  compiler_target_platform: &'a str,
  target_directory: Option<&'a Path>,
  encoding: &'a str,
}

#[derive(Clone, Debug)]
pub struct ProcessImportSorter {
  command: EngineCommand,
}

impl ProcessImportSorter {
  pub fn resolve(environment: &impl Environment) -> Result<ProcessImportSorter> {
    Ok(ProcessImportSorter {
      command: EngineCommand::resolve(environment, "import sorting", IMPSORT_CMD_ENV_VAR, DEFAULT_IMPSORT_CMD)?,
    })
  }
}

impl ImportSorter for ProcessImportSorter {
  fn sort_imports(&self, config: &ImportOrderConfig, path: &Path, file_bytes: &[u8]) -> Result<SortOutcome> {
    let text = std::str::from_utf8(file_bytes).context("The import sorter input was not valid UTF-8")?;
    let request = SortImportsRequest {
      kind: "sortImports",
      config,
      path: &path.to_string_lossy(),
      text,
    };
    let sorted_bytes = self.command.run(&request)?;
    if sorted_bytes.as_slice() == file_bytes {
      Ok(SortOutcome::Unchanged)
    } else {
      Ok(SortOutcome::Changed(sorted_bytes))
    }
  }
}

#[derive(Clone, Debug)]
pub struct ProcessJavaFormatter {
  command: EngineCommand,
}

impl ProcessJavaFormatter {
  pub fn resolve(environment: &impl Environment) -> Result<ProcessJavaFormatter> {
    Ok(ProcessJavaFormatter {
      command: EngineCommand::resolve(environment, "code formatting", FORMAT_CMD_ENV_VAR, DEFAULT_FORMAT_CMD)?,
    })
  }
}

impl JavaFormatter for ProcessJavaFormatter {
  fn format_text(&self, config: &FormatterConfig, file_text: &str, line_ending: LineEnding) -> Result<Option<String>> {
    let request = FormatRequest {
      kind: "format",
      options: &config.options,
      source: SourceLevels {
        compiler_source: &config.compiler_source,
        compiler_compliance: &config.compiler_compliance,
        compiler_target_platform: &config.compiler_target_platform,
        target_directory: config.target_directory.as_deref(),
        encoding: &config.encoding,
      },
      line_ending: line_ending.resolve(file_text),
      text: file_text,
    };
    let formatted_bytes = self.command.run(&request)?;
    let formatted_text = String::from_utf8(formatted_bytes).context("The code formatting engine returned invalid UTF-8")?;
    if formatted_text == file_text {
      Ok(None)
    } else {
      Ok(Some(formatted_text))
    }
  }
}
