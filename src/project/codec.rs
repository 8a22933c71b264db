//! YAML encoding of [`Project`] documents.

use crate::error::{Result, ReviveError};
use crate::project::types::Project;

const TEMPLATE_BODY: &str = r#"# project_root: ~/src/project_path
# on_project_start:
#   - docker compose up -d
# on_project_end:
#   - docker compose down
# windows:
#   - name: editor
#     panes:
#       - commands: [vim]
#   - name: shells
#     panes:
#       - commands: [htop]
#       - commands: ["tail -f log/development.log"]
"#;

pub fn encode_project(project: &Project) -> Result<String> {
    serde_yaml::to_string(project).map_err(|e| ReviveError::Encode(e.to_string()))
}

pub fn decode_project(content: &str) -> Result<Project> {
    let project: Project =
        serde_yaml::from_str(content).map_err(|e| ReviveError::Decode(e.to_string()))?;

    if project.name.trim().is_empty() {
        return Err(ReviveError::Decode(
            "project_name is missing or empty".to_string(),
        ));
    }

    Ok(project)
}

/// Starter document for `revive new`: the name plus a commented example.
pub fn template_document(name: &str) -> Result<String> {
    let header = encode_project(&Project {
        name: name.to_string(),
        ..Project::default()
    })?;
    Ok(format!("{}{}", header, TEMPLATE_BODY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::types::{PaneSpec, WindowSpec};

    fn sample() -> Project {
        Project {
            name: "web".to_string(),
            root: Some("/srv/web".to_string()),
            on_start: vec!["docker compose up -d".to_string()],
            on_end: vec!["docker compose down".to_string()],
            windows: vec![WindowSpec {
                name: "editor".to_string(),
                height: 24,
                width: 80,
                focus: true,
                panes: vec![
                    PaneSpec {
                        commands: vec!["vim".to_string()],
                        height: 24,
                        width: 40,
                        focus: true,
                    },
                    PaneSpec {
                        commands: vec!["tail -f log/dev.log".to_string()],
                        height: 24,
                        width: 39,
                        focus: false,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_encode_uses_document_keys() {
        let yaml = encode_project(&sample()).unwrap();
        assert!(yaml.contains("project_name: web"));
        assert!(yaml.contains("project_root: /srv/web"));
        assert!(yaml.contains("on_project_start:"));
        assert!(yaml.contains("on_project_end:"));
        assert!(yaml.contains("windows:"));
        assert!(yaml.contains("panes:"));
        assert!(yaml.contains("commands:"));
    }

    #[test]
    fn test_encode_omits_empty_optionals() {
        let project = Project {
            name: "bare".to_string(),
            windows: vec![WindowSpec {
                name: "one".to_string(),
                panes: vec![PaneSpec::default()],
                ..WindowSpec::default()
            }],
            ..Project::default()
        };
        let yaml = encode_project(&project).unwrap();

        assert!(!yaml.contains("project_root"));
        assert!(!yaml.contains("on_project_start"));
        assert!(!yaml.contains("on_project_end"));
        assert!(!yaml.contains("focus"));
    }

    #[test]
    fn test_round_trip() {
        let project = sample();
        let decoded = decode_project(&encode_project(&project).unwrap()).unwrap();
        assert_eq!(decoded, project);
    }

    #[test]
    fn test_decode_hand_written_document() {
        let yaml = r#"
project_name: api
windows:
  - name: server
    panes:
      - commands:
          - cargo watch -x run
      - commands: [htop]
        focus: true
"#;
        let project = decode_project(yaml).unwrap();
        assert_eq!(project.name, "api");
        assert!(project.root.is_none());
        assert_eq!(project.windows[0].height, 0);
        assert_eq!(project.windows[0].panes.len(), 2);
        assert_eq!(project.windows[0].panes[0].commands, vec!["cargo watch -x run"]);
        assert!(!project.windows[0].panes[0].focus);
        assert!(project.windows[0].panes[1].focus);
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        let err = decode_project("windows: []\n").unwrap_err();
        assert!(matches!(err, ReviveError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_malformed_structure() {
        let err = decode_project("project_name: x\nwindows: not-a-list\n").unwrap_err();
        assert!(matches!(err, ReviveError::Decode(_)));
    }

    #[test]
    fn test_template_decodes_to_empty_project() {
        let template = template_document("scratch").unwrap();
        assert!(template.starts_with("project_name: scratch\n"));

        let project = decode_project(&template).unwrap();
        assert_eq!(project.name, "scratch");
        assert!(project.windows.is_empty());
    }
}
