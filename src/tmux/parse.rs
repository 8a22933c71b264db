//! Parsers for the fixed-format replies of tmux listing commands.

use crate::error::{Result, ReviveError};
use crate::session::{Pane, Window};

/// `list-sessions -F "#S"`: one name per line.
///
/// An empty reply yields `[""]`; callers treat an empty first entry as
/// "no sessions".
pub fn parse_session_names(output: &str) -> Vec<String> {
    output.trim().split('\n').map(str::to_string).collect()
}

/// True if `names` came from a server with no sessions.
pub fn is_no_sessions(names: &[String]) -> bool {
    names.first().map(|n| n.is_empty()).unwrap_or(true)
}

/// Lines of `index name width height active`, whitespace separated.
///
/// Lines with fewer than four fields are skipped. A missing active field
/// means the window is not focused.
pub fn parse_windows(output: &str) -> Result<Vec<Window>> {
    let mut windows = Vec::new();

    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            if !line.trim().is_empty() {
                tracing::warn!("Skipping malformed window line: {:?}", line);
            }
            continue;
        }

        windows.push(Window {
            index: parse_number(parts[0], "window index", line)?,
            name: parts[1].to_string(),
            width: parse_number(parts[2], "window width", line)?,
            height: parse_number(parts[3], "window height", line)?,
            focus: parts.get(4).is_some_and(|flag| is_active(flag)),
            panes: Vec::new(),
        });
    }

    Ok(windows)
}

/// Lines of `index active height width command`, split on single spaces.
///
/// A command name containing a space keeps only its first word.
pub fn parse_panes(output: &str) -> Result<Vec<Pane>> {
    let mut panes = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() < 5 {
            return Err(ReviveError::Parse(format!(
                "expected 5 pane fields, got {} in {:?}",
                parts.len(),
                line
            )));
        }

        panes.push(Pane {
            index: parse_number(parts[0], "pane index", line)?,
            focus: is_active(parts[1]),
            height: parse_number(parts[2], "pane height", line)?,
            width: parse_number(parts[3], "pane width", line)?,
            current_command: parts[4].to_string(),
        });
    }

    Ok(panes)
}

fn is_active(flag: &str) -> bool {
    flag == "1"
}

fn parse_number(field: &str, what: &str, line: &str) -> Result<u32> {
    field.parse::<u32>().map_err(|e| {
        ReviveError::Parse(format!("invalid {} {:?} in {:?}: {}", what, field, line, e))
    })
}
