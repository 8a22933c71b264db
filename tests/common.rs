use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use revive::{ProcessRunner, Result, ReviveError};
use tempfile::TempDir;

/// Get the path to the revive binary for testing.
#[allow(dead_code)]
pub fn get_revive_path() -> PathBuf {
    assert_cmd::cargo::cargo_bin!("revive").to_path_buf()
}

#[allow(dead_code)]
struct Rule {
    subcommand: String,
    target: Option<String>,
    reply: std::result::Result<String, String>,
}

/// A `ProcessRunner` that answers tmux subcommands from a script and records
/// every invocation. Unscripted subcommands succeed with empty output.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Vec<Rule>,
    calls: RefCell<Vec<Vec<String>>>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every call of `subcommand`.
    pub fn reply(mut self, subcommand: &str, output: &str) -> Self {
        self.rules.push(Rule {
            subcommand: subcommand.to_string(),
            target: None,
            reply: Ok(output.to_string()),
        });
        self
    }

    /// Reply to `subcommand` only when it is aimed at `-t target`.
    pub fn reply_for(mut self, subcommand: &str, target: &str, output: &str) -> Self {
        self.rules.push(Rule {
            subcommand: subcommand.to_string(),
            target: Some(target.to_string()),
            reply: Ok(output.to_string()),
        });
        self
    }

    /// Fail `subcommand` with `stderr`.
    pub fn fail(mut self, subcommand: &str, stderr: &str) -> Self {
        self.rules.push(Rule {
            subcommand: subcommand.to_string(),
            target: None,
            reply: Err(stderr.to_string()),
        });
        self
    }

    /// Fail `subcommand` only when it is aimed at `-t target`.
    pub fn fail_for(mut self, subcommand: &str, target: &str, stderr: &str) -> Self {
        self.rules.push(Rule {
            subcommand: subcommand.to_string(),
            target: Some(target.to_string()),
            reply: Err(stderr.to_string()),
        });
        self
    }

    /// Every invocation so far as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The subcommands invoked so far, in order.
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| call.get(1).cloned())
            .collect()
    }
}

#[allow(dead_code)]
fn target_of(args: &[String]) -> Option<&str> {
    args.iter()
        .position(|a| a == "-t")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);

        let subcommand = args.first().map(String::as_str).unwrap_or("");
        let target = target_of(args);

        let rule = self.rules.iter().find(|rule| {
            rule.subcommand == subcommand
                && rule
                    .target
                    .as_deref()
                    .map(|t| Some(t) == target)
                    .unwrap_or(true)
        });

        match rule.map(|r| &r.reply) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(stderr)) => Err(ReviveError::Process {
                program: program.to_string(),
                args: args.to_vec(),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Isolated config directory; `REVIVE_CONFIG_DIR` points at it while alive.
/// Contexts in the same test binary are serialized since they share the
/// process environment.
#[allow(dead_code)]
pub struct TestConfigContext {
    pub temp_dir: TempDir,
    pub config_dir: PathBuf,
    _env_guard: MutexGuard<'static, ()>,
}

impl Default for TestConfigContext {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestConfigContext {
    pub fn new() -> Self {
        let env_guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");

        env::set_var("REVIVE_CONFIG_DIR", config_dir.to_string_lossy().to_string());

        Self {
            temp_dir,
            config_dir,
            _env_guard: env_guard,
        }
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.config_dir.join("projects")
    }
}

impl Drop for TestConfigContext {
    fn drop(&mut self) {
        env::remove_var("REVIVE_CONFIG_DIR");
    }
}
