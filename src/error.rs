use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviveError>;

#[derive(Error, Debug)]
pub enum ReviveError {
    #[error("failed to execute {program} {}: {stderr}", .args.join(" "))]
    Process {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Project already exists: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Precondition(String),

    #[error("Failed to decode project document: {0}")]
    Decode(String),

    #[error("Failed to encode project document: {0}")]
    Encode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ReviveError>,
    },
}

impl ReviveError {
    /// Wraps the error with a description of what was being attempted.
    pub fn context(self, context: impl Into<String>) -> Self {
        ReviveError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context wrappers.
    pub fn root(&self) -> &ReviveError {
        match self {
            ReviveError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Adds `.context(..)` to results carrying a [`ReviveError`].
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| e.context(f()))
    }
}

impl From<std::io::Error> for ReviveError {
    fn from(err: std::io::Error) -> Self {
        ReviveError::Io(err)
    }
}

impl From<serde_json::Error> for ReviveError {
    fn from(err: serde_json::Error) -> Self {
        ReviveError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_embeds_invocation() {
        let err = ReviveError::Process {
            program: "tmux".to_string(),
            args: vec!["list-windows".to_string(), "-t".to_string(), "main".to_string()],
            stderr: "can't find session: main".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to execute tmux list-windows -t main: can't find session: main"
        );
    }

    #[test]
    fn test_context_wraps_and_root_unwraps() {
        let err = ReviveError::NotFound("project 'web'".to_string())
            .context("loading project")
            .context("building session");

        assert_eq!(
            err.to_string(),
            "building session: loading project: Not found: project 'web'"
        );
        assert!(matches!(err.root(), ReviveError::NotFound(_)));
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<()> = Err(ReviveError::Parse("bad line".to_string()));
        let err = result
            .with_context(|| format!("listing windows of {}", "main"))
            .unwrap_err();
        assert!(err.to_string().starts_with("listing windows of main: "));
    }
}
