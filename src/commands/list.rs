use crate::config::load_config;
use crate::error::Result;
use crate::project::{decode_project, Project, ProjectStore};

struct ProjectSummary {
    name: String,
    project: Option<Project>,
}

impl ProjectSummary {
    fn windows(&self) -> String {
        self.project
            .as_ref()
            .map(|p| p.windows.len().to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn panes(&self) -> String {
        self.project
            .as_ref()
            .map(|p| p.pane_count().to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn root(&self) -> &str {
        match &self.project {
            Some(project) => project.root.as_deref().unwrap_or(""),
            None => "(invalid document)",
        }
    }
}

fn summarize<S: ProjectStore + ?Sized>(store: &S) -> Result<Vec<ProjectSummary>> {
    let mut summaries = Vec::new();
    for name in store.list()? {
        let project = match store.read(&name).and_then(|doc| decode_project(&doc)) {
            Ok(project) => Some(project),
            Err(e) => {
                tracing::warn!("Could not load project {}: {}", name, e);
                None
            }
        };
        summaries.push(ProjectSummary { name, project });
    }
    Ok(summaries)
}

pub fn list_command(porcelain: bool, json: bool, number: Option<usize>) -> Result<()> {
    let config = load_config()?;
    let store = super::open_store(&config)?;
    let mut summaries = summarize(&store)?;
    if let Some(limit) = number {
        summaries.truncate(limit);
    }

    if json {
        let projects: Vec<_> = summaries
            .iter()
            .map(|s| match &s.project {
                Some(project) => serde_json::json!({
                    "name": s.name,
                    "root": project.root,
                    "windows": project.windows.len(),
                    "panes": project.pane_count(),
                    "valid": true,
                }),
                None => serde_json::json!({
                    "name": s.name,
                    "valid": false,
                }),
            })
            .collect();

        println!("{}", serde_json::to_string(&projects)?);
    } else if porcelain {
        for s in &summaries {
            println!("{}\t{}\t{}\t{}", s.name, s.windows(), s.panes(), s.root());
        }
    } else {
        if summaries.is_empty() {
            println!("Saved projects:");
            println!();
            println!("  (No projects yet, create one with 'revive freeze' or 'revive new')");
            return Ok(());
        }

        let name_width = summaries
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0)
            .max(16)
            + 2;
        let windows_width = 10;
        let panes_width = 8;

        println!("Saved projects:");
        println!();
        println!(
            "{:<width_name$}{:<width_windows$}{:<width_panes$}ROOT",
            "NAME",
            "WINDOWS",
            "PANES",
            width_name = name_width,
            width_windows = windows_width,
            width_panes = panes_width,
        );
        println!("{}", "─".repeat(name_width + windows_width + panes_width + 4));

        for s in &summaries {
            println!(
                "{:<width_name$}{:<width_windows$}{:<width_panes$}{}",
                s.name,
                s.windows(),
                s.panes(),
                s.root(),
                width_name = name_width,
                width_windows = windows_width,
                width_panes = panes_width,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FileStore;
    use tempfile::TempDir;

    #[test]
    fn test_summarize_marks_invalid_documents() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        store
            .create(
                "good",
                "project_name: good\nproject_root: /srv\nwindows:\n  - name: a\n    panes:\n      - commands: [vim]\n",
            )
            .unwrap();
        store.create("broken", "windows: 12\n").unwrap();

        let summaries = summarize(&store).unwrap();
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].name, "broken");
        assert!(summaries[0].project.is_none());
        assert_eq!(summaries[0].windows(), "-");
        assert_eq!(summaries[0].root(), "(invalid document)");

        assert_eq!(summaries[1].name, "good");
        assert_eq!(summaries[1].windows(), "1");
        assert_eq!(summaries[1].panes(), "1");
        assert_eq!(summaries[1].root(), "/srv");
    }
}
