//! Queries and mutations against a running tmux server.

pub mod parse;

use crate::error::{Result, ResultExt, ReviveError};
use crate::process::{CommandBuilder, ProcessRunner};
use crate::session::{Pane, Window};

pub use parse::{is_no_sessions, parse_panes, parse_session_names, parse_windows};

pub const DEFAULT_BINARY: &str = "tmux";

const SESSION_NAME_FORMAT: &str = "#S";
const PANE_PATH_FORMAT: &str = "#{pane_current_path}";
const WINDOW_FORMAT: &str =
    "#{window_index} #{window_name} #{window_width} #{window_height} #{window_active}";
const PANE_FORMAT: &str =
    "#{pane_index} #{pane_active} #{pane_height} #{pane_width} #{pane_current_command}";

/// True when running inside a tmux client (the `TMUX` marker is set).
pub fn is_inside_tmux() -> bool {
    std::env::var("TMUX").map(|v| !v.is_empty()).unwrap_or(false)
}

/// A tmux binary driven through a [`ProcessRunner`], one call at a time.
#[derive(Debug, Clone)]
pub struct Tmux<R> {
    runner: R,
    binary: String,
}

impl<R: ProcessRunner> Tmux<R> {
    pub fn new(runner: R) -> Self {
        Self::with_binary(runner, DEFAULT_BINARY)
    }

    pub fn with_binary(runner: R, binary: &str) -> Self {
        Self {
            runner,
            binary: binary.to_string(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn command(&self, subcommand: &str) -> CommandBuilder {
        CommandBuilder::new(&self.binary, [subcommand])
    }

    pub fn list_session_names(&self) -> Result<Vec<String>> {
        let reply = self
            .command("list-sessions")
            .add(["-F", SESSION_NAME_FORMAT])
            .run(&self.runner);

        match reply {
            Ok(out) => Ok(parse_session_names(&out)),
            Err(ReviveError::Process { ref stderr, .. }) if is_no_server(stderr) => {
                tracing::debug!("No tmux server running: {}", stderr);
                Ok(parse_session_names(""))
            }
            Err(e) => Err(e.context("listing tmux sessions")),
        }
    }

    /// Name of the session the calling client is attached to.
    pub fn current_session_name(&self) -> Result<String> {
        self.command("display-message")
            .add(["-p", SESSION_NAME_FORMAT])
            .run(&self.runner)
            .context("getting current tmux session")
    }

    pub fn list_windows(&self, session: &str) -> Result<Vec<Window>> {
        let out = self
            .command("list-windows")
            .add(["-t", session, "-F", WINDOW_FORMAT])
            .run(&self.runner)
            .with_context(|| format!("listing windows of {}", session))?;

        parse_windows(&out).with_context(|| format!("listing windows of {}", session))
    }

    /// Panes of the window addressed by `target` (`session:index`).
    pub fn list_panes(&self, target: &str) -> Result<Vec<Pane>> {
        let out = self
            .command("list-panes")
            .add(["-t", target, "-F", PANE_FORMAT])
            .run(&self.runner)
            .with_context(|| format!("listing panes of {}", target))?;

        parse_panes(&out).with_context(|| format!("listing panes of {}", target))
    }

    /// Working directory of the active pane in `session`.
    pub fn current_pane_path(&self, session: &str) -> Result<String> {
        self.command("display-message")
            .add(["-p", "-F", PANE_PATH_FORMAT, "-t", session])
            .run(&self.runner)
            .with_context(|| format!("getting current path of {}", session))
    }

    pub fn new_session(&self, name: &str) -> Result<()> {
        self.command("new-session")
            .add(["-d", "-s", name])
            .run(&self.runner)
            .with_context(|| format!("creating tmux session {}", name))?;
        Ok(())
    }

    pub fn new_window(&self, session: &str, name: &str) -> Result<()> {
        self.command("new-window")
            .add(["-t", session, "-n", name])
            .run(&self.runner)
            .with_context(|| format!("creating window {} in {}", name, session))?;
        Ok(())
    }

    /// Splits `session:window` horizontally with `command` as the new pane's process.
    pub fn split_window(&self, session: &str, window: &str, command: &str) -> Result<()> {
        let target = format!("{}:{}", session, window);
        self.command("split-window")
            .add(["-t", target.as_str(), "-h", command])
            .run(&self.runner)
            .with_context(|| format!("splitting {} to run {:?}", target, command))?;
        Ok(())
    }

    /// Types `command` followed by Enter into the session's active pane.
    pub fn send_keys(&self, session: &str, command: &str) -> Result<()> {
        self.command("send-keys")
            .add(["-t", session, command, "C-m"])
            .run(&self.runner)
            .with_context(|| format!("sending {:?} to {}", command, session))?;
        Ok(())
    }
}

fn is_no_server(stderr: &str) -> bool {
    stderr.contains("no server running") || stderr.contains("error connecting to")
}
