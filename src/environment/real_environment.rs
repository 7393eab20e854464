use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Environment;

#[derive(Clone)]
pub struct RealEnvironment {
  output_lock: Arc<Mutex<()>>,
  is_verbose: bool,
}

impl RealEnvironment {
  pub fn new(is_verbose: bool) -> RealEnvironment {
    RealEnvironment {
      output_lock: Arc::new(Mutex::new(())),
      is_verbose,
    }
  }
}

impl Environment for RealEnvironment {
  fn output(&self, text: &str) {
    let _g = self.output_lock.lock();
    let mut stdout = std::io::stdout();
    // failing to write the result is a broken pipe; nothing useful to do
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
  }

  #[allow(clippy::print_stderr)]
  fn log(&self, text: &str) {
    let _g = self.output_lock.lock();
    eprintln!("{}", text);
  }

  #[allow(clippy::print_stderr)]
  fn log_error(&self, text: &str) {
    let _g = self.output_lock.lock();
    eprintln!("{}", text);
  }

  fn is_verbose(&self) -> bool {
    self.is_verbose
  }

  fn env_var(&self, name: &str) -> Option<String> {
    std::env::var(name).ok()
  }
}
