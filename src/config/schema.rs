use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmuxConfig {
    /// Program used for every tmux invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
}

impl TmuxConfig {
    pub fn get_binary(&self) -> String {
        self.binary
            .clone()
            .unwrap_or_else(super::default_tmux_binary)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Where project documents are kept. Defaults to `<config dir>/projects`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub tmux: TmuxConfig,
    #[serde(default)]
    pub store: StoreConfig,
}
