use crate::config::load_config;
use crate::error::{Result, ReviveError};
use crate::freeze::{freeze_session, resolve_session, SessionResolution};
use crate::project::ProjectStore;
use crate::tmux::is_inside_tmux;
use std::io::{BufRead, Write};

pub fn freeze_command(session: Option<String>) -> Result<()> {
    let config = load_config()?;
    let store = super::open_store(&config)?;
    let tmux = super::system_tmux(&config);
    let attached = is_inside_tmux();

    let name = match session {
        Some(name) => name,
        None => match resolve_session(&tmux, attached)? {
            SessionResolution::Resolved(name) => name,
            SessionResolution::NeedsSelection(candidates) => {
                let stdin = std::io::stdin();
                select_session(&candidates, &mut stdin.lock(), &mut std::io::stdout())?
            }
        },
    };

    let project = freeze_session(&tmux, &store, &name, attached)?;

    println!(
        "Froze session '{}' ({} windows, {} panes)",
        project.name,
        project.windows.len(),
        project.pane_count()
    );
    if let Some(path) = store.path(&project.name) {
        println!("Saved to {}", path.display());
    }
    Ok(())
}

/// Lists `candidates` and reads one numeric choice from `input`.
pub fn select_session<R, W>(candidates: &[String], input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if candidates.is_empty() {
        return Err(ReviveError::Precondition(
            "no sessions available".to_string(),
        ));
    }

    writeln!(output, "Select from range [0-{}]:", candidates.len() - 1)?;
    for (i, name) in candidates.iter().enumerate() {
        writeln!(output, "[{}] {}", i, name)?;
    }
    write!(output, " ===> ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ReviveError::Precondition(format!("failed to read input: {}", e)))?;

    let choice = line.trim();
    let index: usize = choice
        .parse()
        .map_err(|_| ReviveError::Precondition(format!("invalid selection: {:?}", choice)))?;

    let selected = candidates
        .get(index)
        .ok_or_else(|| ReviveError::Precondition(format!("invalid selection: {}", index)))?;

    writeln!(output, "Selected session: {}", selected)?;
    Ok(selected.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidates() -> Vec<String> {
        vec!["main".to_string(), "work".to_string(), "logs".to_string()]
    }

    #[test]
    fn test_select_session_valid_choice() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();

        let selected = select_session(&candidates(), &mut input, &mut output).unwrap();
        assert_eq!(selected, "work");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("Select from range [0-2]:\n[0] main\n[1] work\n[2] logs\n"));
        assert!(printed.contains("Selected session: work"));
    }

    #[test]
    fn test_select_session_out_of_range() {
        let mut input = Cursor::new("3\n");
        let err = select_session(&candidates(), &mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ReviveError::Precondition(_)));
        assert!(err.to_string().contains("invalid selection: 3"));
    }

    #[test]
    fn test_select_session_not_a_number() {
        for answer in ["work\n", "-1\n", "\n", ""] {
            let mut input = Cursor::new(answer);
            assert!(
                select_session(&candidates(), &mut input, &mut Vec::new()).is_err(),
                "answer {:?} should be rejected",
                answer
            );
        }
    }

    #[test]
    fn test_select_session_no_candidates() {
        let mut input = Cursor::new("0\n");
        assert!(select_session(&[], &mut input, &mut Vec::new()).is_err());
    }
}
