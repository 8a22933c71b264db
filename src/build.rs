//! Rebuilding a tmux session from a stored project.

use crate::error::{Result, ResultExt, ReviveError};
use crate::process::ProcessRunner;
use crate::project::{decode_project, Project, ProjectStore};
use crate::tmux::Tmux;

/// Loads project `name` from `store` and recreates it as a detached session.
///
/// Refuses to run from inside tmux. A failure part-way leaves whatever was
/// already created in place.
pub fn build_project<R, S>(
    tmux: &Tmux<R>,
    store: &S,
    name: &str,
    attached: bool,
) -> Result<Project>
where
    R: ProcessRunner,
    S: ProjectStore + ?Sized,
{
    if attached {
        return Err(ReviveError::Precondition(
            "already inside tmux session".to_string(),
        ));
    }

    let document = store
        .read(name)
        .with_context(|| format!("loading project {}", name))?;
    let project =
        decode_project(&document).with_context(|| format!("loading project {}", name))?;

    realize_project(tmux, &project)?;
    Ok(project)
}

/// Issues the tmux commands that lay out `project`.
pub fn realize_project<R: ProcessRunner>(tmux: &Tmux<R>, project: &Project) -> Result<()> {
    let session = project.name.as_str();

    tmux.new_session(session)?;
    tracing::info!("Created new tmux session: {}", session);

    for window in &project.windows {
        tmux.new_window(session, &window.name)?;

        for pane in &window.panes {
            for command in &pane.commands {
                tmux.split_window(session, &window.name, command)?;
            }
        }
    }

    for command in &project.on_start {
        tmux.send_keys(session, command)?;
    }

    tracing::info!(
        "Configured tmux session: {} ({} windows, {} startup commands)",
        session,
        project.windows.len(),
        project.on_start.len()
    );
    Ok(())
}
