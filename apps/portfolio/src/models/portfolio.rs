use serde::{Deserialize, Deserializer, Serialize};

/// The full site record. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub contact: Contact,
    pub statistics: Vec<Statistic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub university: String,
    pub year: String,
    pub location: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillCategory {
    pub fn icon_or_default(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => "💡",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Maintained,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Maintained,
        ProjectStatus::Planned,
    ];

    pub fn parse(value: &str) -> Option<ProjectStatus> {
        ProjectStatus::ALL
            .into_iter()
            .find(|s| s.as_str() == value.trim())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Maintained => "maintained",
            ProjectStatus::Planned => "planned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Maintained => "Maintained",
            ProjectStatus::Planned => "Planned",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "✅",
            ProjectStatus::InProgress => "🚧",
            ProjectStatus::Maintained => "🔄",
            ProjectStatus::Planned => "🎯",
        }
    }

    pub fn css_class(&self) -> String {
        format!("status-{}", self.as_str())
    }
}

/// Unrecognised or non-string statuses show the `Completed` badge instead of failing the load.
fn status_or_completed<'de, D>(deserializer: D) -> Result<ProjectStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(ProjectStatus::parse)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "status_or_completed")]
    pub status: ProjectStatus,
    pub featured: bool,
    /// Compared lexically, never parsed.
    #[serde(alias = "completionDate")]
    pub year: String,
    pub category: String,
    pub screenshot: Option<String>,
    pub live_demo: Option<String>,
    pub video_demo: Option<String>,
    pub case_study: Option<String>,
    pub github_link: Option<String>,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub features: Vec<String>,
}

/// A link counts as present unless it is missing, blank, or the `#` placeholder.
pub fn present_link(link: &Option<String>) -> Option<&str> {
    link.as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != "#")
}

impl Project {
    pub fn screenshot(&self) -> Option<&str> {
        self.screenshot
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Lowercased technologies joined by spaces, as exposed in `data-tech`.
    pub fn tech_string(&self) -> String {
        self.technologies.join(" ").to_lowercase()
    }

    /// Haystack for free-text search: title, description, technologies and category.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.tech_string(),
            self.category
        )
        .to_lowercase()
    }

    /// Action links in display order. Falls back to the generic `link` when none exist.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let candidates = [
            (ActionKind::LiveDemo, &self.live_demo),
            (ActionKind::Video, &self.video_demo),
            (ActionKind::CaseStudy, &self.case_study),
            (ActionKind::Code, &self.github_link),
        ];

        let mut actions: Vec<ProjectAction> = candidates
            .into_iter()
            .filter_map(|(kind, link)| {
                present_link(link).map(|href| ProjectAction {
                    kind,
                    href: href.to_string(),
                    label: kind.label().to_string(),
                })
            })
            .collect();

        if actions.is_empty() {
            if let Some(href) = present_link(&self.link) {
                actions.push(ProjectAction {
                    kind: ActionKind::Link,
                    href: href.to_string(),
                    label: self
                        .link_text
                        .clone()
                        .filter(|t| !t.trim().is_empty())
                        .unwrap_or_else(|| "View Project".to_string()),
                });
            }
        }

        actions
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    LiveDemo,
    Video,
    CaseStudy,
    Code,
    Link,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::LiveDemo => "Live Demo",
            ActionKind::Video => "Video",
            ActionKind::CaseStudy => "Case Study",
            ActionKind::Code => "Code",
            ActionKind::Link => "View Project",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActionKind::LiveDemo => "🌐",
            ActionKind::Video => "▶️",
            ActionKind::CaseStudy => "📄",
            ActionKind::Code => "💻",
            ActionKind::Link => "→",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ActionKind::LiveDemo => "project-demo-btn",
            ActionKind::Video => "project-video-btn",
            ActionKind::CaseStudy => "project-case-btn",
            ActionKind::Code => "project-github-btn",
            ActionKind::Link => "project-link-btn",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectAction {
    pub kind: ActionKind,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub location: String,
    pub cv_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistic {
    pub icon: String,
    pub label: String,
    pub value: u64,
    pub suffix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_kebab_case() {
        let status: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(status.css_class(), "status-in-progress");
    }

    #[test]
    fn test_unrecognised_status_falls_back_to_completed() {
        let project: Project =
            serde_json::from_str(r#"{"title": "A", "status": "archived"}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);

        let project: Project = serde_json::from_str(r#"{"title": "B", "status": 3}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);

        let project: Project =
            serde_json::from_str(r#"{"title": "C", "status": "planned"}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Planned);
    }

    #[test]
    fn test_project_defaults_when_fields_missing() {
        let project: Project = serde_json::from_str(r#"{"title": "CLI"}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(!project.featured);
        assert!(project.year.is_empty());
        assert!(project.actions().is_empty());
    }

    #[test]
    fn test_completion_date_is_accepted_as_year() {
        let project: Project =
            serde_json::from_str(r#"{"title": "Old", "completionDate": "2022"}"#).unwrap();
        assert_eq!(project.year, "2022");
    }

    #[test]
    fn test_placeholder_links_are_absent() {
        assert_eq!(present_link(&Some("#".to_string())), None);
        assert_eq!(present_link(&Some("   ".to_string())), None);
        assert_eq!(present_link(&None), None);
        assert_eq!(
            present_link(&Some("https://demo.dev".to_string())),
            Some("https://demo.dev")
        );
    }

    #[test]
    fn test_actions_fall_back_to_generic_link() {
        let project = Project {
            github_link: Some("#".to_string()),
            link: Some("https://example.com".to_string()),
            link_text: Some("View Live".to_string()),
            ..Default::default()
        };
        let actions = project.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, ActionKind::Link);
        assert_eq!(actions[0].label, "View Live");
    }

    #[test]
    fn test_actions_skip_fallback_when_real_links_exist() {
        let project = Project {
            live_demo: Some("https://demo.dev".to_string()),
            github_link: Some("https://github.com/me/x".to_string()),
            link: Some("https://example.com".to_string()),
            ..Default::default()
        };
        let kinds: Vec<ActionKind> = project.actions().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::LiveDemo, ActionKind::Code]);
    }

    #[test]
    fn test_search_text_lowercases_everything() {
        let project = Project {
            title: "Task App".to_string(),
            description: "CLI tool".to_string(),
            technologies: vec!["Python".to_string(), "SQLite".to_string()],
            category: "Tools".to_string(),
            ..Default::default()
        };
        assert_eq!(project.search_text(), "task app cli tool python sqlite tools");
    }

    #[test]
    fn test_skill_icon_defaults() {
        let skill = SkillCategory {
            category: "Misc".to_string(),
            icon: None,
            items: vec![],
        };
        assert_eq!(skill.icon_or_default(), "💡");
    }
}
