//! Capture-time view of a live tmux session.
//!
//! These types only exist while freezing. Indices are whatever tmux reported
//! and are used to address windows and panes in follow-up queries.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub name: String,
    /// The caller was inside this session when it was resolved.
    pub attach: bool,
    pub windows: Vec<Window>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Window {
    pub index: u32,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub focus: bool,
    pub panes: Vec<Pane>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pane {
    pub index: u32,
    pub focus: bool,
    pub height: u32,
    pub width: u32,
    /// Foreground command name at capture time, e.g. `vim` or `zsh`.
    pub current_command: String,
}

impl Session {
    pub fn new(name: &str, attach: bool) -> Self {
        Self {
            name: name.to_string(),
            attach,
            windows: Vec::new(),
        }
    }
}

impl Window {
    /// tmux target for this window inside `session`.
    pub fn target(&self, session: &str) -> String {
        format!("{}:{}", session, self.index)
    }
}
