use crate::error::{Result, ReviveError};

/// Checks a project name given on the command line. Names become file
/// names in the project store and tmux session names.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ReviveError::Config(
            "Project name cannot be empty".to_string(),
        ));
    }

    if name.starts_with('-') {
        return Err(ReviveError::Config(
            "Project name cannot start with '-'".to_string(),
        ));
    }

    for byte in name.bytes() {
        if byte < 32 || byte == 127 {
            return Err(ReviveError::Config(
                "Project name contains control characters".to_string(),
            ));
        }
    }

    // tmux rewrites ':' and '.' in session names
    let disallowed_patterns = ["/", "\\", ":", "."];
    for pattern in &disallowed_patterns {
        if name.contains(pattern) {
            return Err(ReviveError::Config(format!(
                "Project name cannot contain '{}'",
                pattern
            )));
        }
    }

    Ok(())
}
