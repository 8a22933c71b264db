//! Capturing a live tmux session into a stored project.

use crate::error::{Result, ResultExt, ReviveError};
use crate::process::ProcessRunner;
use crate::project::{encode_project, Project, ProjectStore};
use crate::session::Session;
use crate::tmux::{is_no_sessions, Tmux};

/// Outcome of picking which session to freeze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResolution {
    Resolved(String),
    /// Several sessions exist; the caller has to choose one and call
    /// [`freeze_session`] with it.
    NeedsSelection(Vec<String>),
}

/// Picks the session to freeze.
///
/// Inside tmux (`attached`) the current session wins. Otherwise a lone
/// session is chosen automatically and several are handed back as
/// candidates.
pub fn resolve_session<R: ProcessRunner>(
    tmux: &Tmux<R>,
    attached: bool,
) -> Result<SessionResolution> {
    if attached {
        return Ok(SessionResolution::Resolved(tmux.current_session_name()?));
    }

    let names = tmux.list_session_names()?;
    if is_no_sessions(&names) {
        return Err(ReviveError::Precondition(
            "no sessions available".to_string(),
        ));
    }

    if names.len() == 1 {
        tracing::info!("Only one session available, selected: {}", names[0]);
        Ok(SessionResolution::Resolved(names[0].clone()))
    } else {
        Ok(SessionResolution::NeedsSelection(names))
    }
}

/// Queries windows and then the panes of each window, in order.
pub fn capture_session<R: ProcessRunner>(
    tmux: &Tmux<R>,
    name: &str,
    attach: bool,
) -> Result<Session> {
    let mut session = Session::new(name, attach);
    session.windows = tmux.list_windows(name)?;

    for window in &mut session.windows {
        let target = window.target(name);
        window.panes = tmux.list_panes(&target)?;
    }

    tracing::debug!(
        "Captured session {} with {} windows",
        name,
        session.windows.len()
    );
    Ok(session)
}

/// The project snapshot of `session`, rooted at its active pane's directory.
pub fn derive_project<R: ProcessRunner>(tmux: &Tmux<R>, session: &Session) -> Result<Project> {
    let root = tmux.current_pane_path(&session.name)?;
    Ok(Project::from_session(session, &root))
}

/// Captures `name` and stores it as a new project of the same name.
///
/// Nothing is stored unless every query succeeds. An existing project of
/// that name is reported as a conflict.
pub fn freeze_session<R, S>(
    tmux: &Tmux<R>,
    store: &S,
    name: &str,
    attach: bool,
) -> Result<Project>
where
    R: ProcessRunner,
    S: ProjectStore + ?Sized,
{
    let session = capture_session(tmux, name, attach)
        .with_context(|| format!("capturing session {}", name))?;
    let project = derive_project(tmux, &session)?;

    let document = encode_project(&project)?;
    store.create(&project.name, &document)?;

    tracing::info!(
        "Froze session {} ({} windows, {} panes)",
        project.name,
        project.windows.len(),
        project.pane_count()
    );
    Ok(project)
}
