pub trait Environment: Clone + Send + Sync + 'static {
  /// Writes the transformed source text to stdout. Nothing is appended,
  /// so the bytes on stdout are exactly what the engines produced.
  fn output(&self, text: &str);
  fn log(&self, text: &str);
  fn log_error(&self, text: &str);
  fn is_verbose(&self) -> bool;
  fn env_var(&self, name: &str) -> Option<String>;
}

// use a macro here so the expression provided is only evaluated when in verbose mode
macro_rules! log_verbose {
    ($environment:expr, $($arg:tt)*) => {
        if $environment.is_verbose() {
            let mut text = String::from("[VERBOSE]: ");
            text.push_str(&format!($($arg)*));
            $environment.log(&text);
        }
    }
}
