use std::{collections::HashSet, fmt, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";
const PREVIEW_STACK_LEN: usize = 4;

static PROJECTS: LazyLock<Result<Vec<ProjectRecord>, ProjectsError>> = LazyLock::new(load_projects);

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectYear {
    Number(u16),
    Text(String),
}

impl fmt::Display for ProjectYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectYear::Number(n) => write!(f, "{n}"),
            ProjectYear::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub tech_stack: Vec<String>,
    pub year: ProjectYear,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl ProjectRecord {
    /// The leading tech-stack entries shown on the preview card.
    pub fn preview_stack(&self) -> impl Iterator<Item = &str> {
        self.tech_stack
            .iter()
            .take(PREVIEW_STACK_LEN)
            .map(|tech| tech.trim())
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectsError {
    #[error("project data file is missing")]
    Missing,
    #[error("couldn't parse project data: {0}")]
    Parse(String),
    #[error("project list is empty")]
    Empty,
    #[error("project #{index} has a blank slug")]
    BlankSlug { index: usize },
    #[error("duplicate project slug: {0}")]
    DuplicateSlug(String),
    #[error("project {0} has no tech stack")]
    EmptyTechStack(String),
}

pub fn parse_projects(json: &str) -> Result<Vec<ProjectRecord>, ProjectsError> {
    let projects = serde_json::from_str::<Vec<ProjectRecord>>(json)
        .map_err(|e| ProjectsError::Parse(e.to_string()))?;
    if projects.is_empty() {
        return Err(ProjectsError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, project) in projects.iter().enumerate() {
        if project.slug.trim().is_empty() {
            return Err(ProjectsError::BlankSlug { index });
        }
        if !seen.insert(project.slug.as_str()) {
            return Err(ProjectsError::DuplicateSlug(project.slug.clone()));
        }
        if project.tech_stack.iter().all(|t| t.trim().is_empty()) {
            return Err(ProjectsError::EmptyTechStack(project.slug.clone()));
        }
    }
    Ok(projects)
}

fn load_projects() -> Result<Vec<ProjectRecord>, ProjectsError> {
    let file = DataAssets::get(PROJECTS_FILE).ok_or(ProjectsError::Missing)?;
    let json = std::str::from_utf8(&file.data).map_err(|e| ProjectsError::Parse(e.to_string()))?;
    parse_projects(json)
}

/// All projects in display order.
pub fn projects() -> Result<&'static [ProjectRecord], ProjectsError> {
    PROJECTS.as_deref().map_err(Clone::clone)
}

pub fn find_project(slug: &str) -> Result<Option<&'static ProjectRecord>, ProjectsError> {
    Ok(projects()?.iter().find(|p| p.slug == slug))
}

/// Colors for the preview card at a given list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub gradient: &'static str,
    pub glow: &'static str,
}

const ACCENTS: [Accent; 4] = [
    Accent {
        gradient: "linear-gradient(90deg, hsl(140, 100%, 47%), hsl(193, 100%, 47%))",
        glow: "hsl(140, 100%, 47%)",
    },
    Accent {
        gradient: "linear-gradient(90deg, #a855f7, #ec4899)",
        glow: "#a855f7",
    },
    Accent {
        gradient: "linear-gradient(90deg, #f59e0b, #ef4444)",
        glow: "#f59e0b",
    },
    Accent {
        gradient: "linear-gradient(90deg, #3b82f6, #06b6d4)",
        glow: "#3b82f6",
    },
];

pub fn accent(index: usize) -> Accent {
    ACCENTS[index % ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, stack: &[&str]) -> String {
        format!(
            r#"{{"slug": "{slug}", "title": "T", "techStack": {:?}, "year": 2024}}"#,
            stack
        )
    }

    #[test]
    fn test_embedded_projects_load() {
        let projects = projects().expect("embedded project data should be valid");
        assert!(!projects.is_empty());
        let first = &projects[0];
        assert_eq!(find_project(&first.slug), Ok(Some(first)));
        assert_eq!(find_project("does-not-exist"), Ok(None));
    }

    #[test]
    fn test_parse_keeps_order_and_year_forms() {
        let json = r#"[
            {"slug": "a", "title": "A", "techStack": ["Rust"], "year": 2024},
            {"slug": "b", "title": "B", "techStack": ["Go"], "year": "2023 - now", "liveUrl": "https://b.dev"}
        ]"#;
        let projects = parse_projects(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].slug, "a");
        assert_eq!(projects[0].year.to_string(), "2024");
        assert_eq!(projects[1].year.to_string(), "2023 - now");
        assert_eq!(projects[1].live_url.as_deref(), Some("https://b.dev"));
        assert_eq!(projects[0].description, None);
        assert_eq!(projects[1].href(), "/projects/b");
    }

    #[test]
    fn test_parse_rejects_bad_data() {
        assert_eq!(parse_projects("[]"), Err(ProjectsError::Empty));
        assert!(matches!(parse_projects("{"), Err(ProjectsError::Parse(_))));

        let blank = format!("[{}, {}]", record("a", &["Rust"]), record("  ", &["Rust"]));
        assert_eq!(parse_projects(&blank), Err(ProjectsError::BlankSlug { index: 1 }));

        let dup = format!("[{}, {}]", record("a", &["Rust"]), record("a", &["Go"]));
        assert_eq!(
            parse_projects(&dup),
            Err(ProjectsError::DuplicateSlug("a".to_string()))
        );

        let no_stack = format!("[{}]", record("a", &[]));
        assert_eq!(
            parse_projects(&no_stack),
            Err(ProjectsError::EmptyTechStack("a".to_string()))
        );
    }

    #[test]
    fn test_preview_stack_is_trimmed_and_capped() {
        let json = format!("[{}]", record("a", &[" React ", "Node", "Mongo", "Express", "Redis"]));
        let projects = parse_projects(&json).unwrap();
        let stack = projects[0].preview_stack().collect::<Vec<_>>();
        assert_eq!(stack, vec!["React", "Node", "Mongo", "Express"]);
    }

    #[test]
    fn test_accent_cycles() {
        assert_eq!(accent(0), accent(4));
        assert_eq!(accent(1).glow, "#a855f7");
        assert_ne!(accent(2), accent(3));
    }
}
