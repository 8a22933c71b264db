use crate::session::{Pane, Session, Window};
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A persisted session layout, addressed by its name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "project_name", default)]
    pub name: String,

    #[serde(
        rename = "project_root",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub root: Option<String>,

    /// Sent to the new session once every window exists.
    #[serde(
        rename = "on_project_start",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub on_start: Vec<String>,

    /// Persisted but never replayed by `build`.
    #[serde(
        rename = "on_project_end",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub on_end: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<WindowSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSpec {
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub focus: bool,
    #[serde(default)]
    pub panes: Vec<PaneSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneSpec {
    /// Each entry becomes its own split running that command line.
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub focus: bool,
}

impl Project {
    /// Snapshot of a captured session rooted at `root`.
    pub fn from_session(session: &Session, root: &str) -> Self {
        Self {
            name: session.name.clone(),
            root: if root.is_empty() {
                None
            } else {
                Some(root.to_string())
            },
            on_start: Vec::new(),
            on_end: Vec::new(),
            windows: session.windows.iter().map(WindowSpec::from).collect(),
        }
    }

    pub fn pane_count(&self) -> usize {
        self.windows.iter().map(|w| w.panes.len()).sum()
    }
}

impl From<&Window> for WindowSpec {
    fn from(window: &Window) -> Self {
        Self {
            name: window.name.clone(),
            height: window.height,
            width: window.width,
            focus: window.focus,
            panes: window.panes.iter().map(PaneSpec::from).collect(),
        }
    }
}

impl From<&Pane> for PaneSpec {
    fn from(pane: &Pane) -> Self {
        Self {
            commands: vec![pane.current_command.clone()],
            height: pane.height,
            width: pane.width,
            focus: pane.focus,
        }
    }
}
