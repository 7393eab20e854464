use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Environment;

#[derive(Default, Clone)]
pub struct TestEnvironment {
  output: Arc<Mutex<String>>,
  logged_messages: Arc<Mutex<Vec<String>>>,
  logged_errors: Arc<Mutex<Vec<String>>>,
  env_vars: Arc<Mutex<HashMap<String, String>>>,
  is_verbose: bool,
}

impl TestEnvironment {
  pub fn new() -> TestEnvironment {
    Default::default()
  }

  pub fn take_output(&self) -> String {
    std::mem::take(&mut *self.output.lock())
  }

  pub fn get_logged_messages(&self) -> Vec<String> {
    self.logged_messages.lock().clone()
  }

  pub fn get_logged_errors(&self) -> Vec<String> {
    self.logged_errors.lock().clone()
  }

  pub fn set_env_var(&self, name: &str, value: &str) {
    self.env_vars.lock().insert(name.to_string(), value.to_string());
  }
}

impl Environment for TestEnvironment {
  fn output(&self, text: &str) {
    self.output.lock().push_str(text);
  }

  fn log(&self, text: &str) {
    self.logged_messages.lock().push(String::from(text));
  }

  fn log_error(&self, text: &str) {
    self.logged_errors.lock().push(String::from(text));
  }

  fn is_verbose(&self) -> bool {
    self.is_verbose
  }

  fn env_var(&self, name: &str) -> Option<String> {
    self.env_vars.lock().get(name).cloned()
  }
}
