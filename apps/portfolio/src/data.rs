use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Portfolio;

/// Reads and parses the portfolio record from a JSON file.
pub async fn load_portfolio(path: impl AsRef<Path>) -> Result<Portfolio> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading portfolio data...");

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read portfolio data from '{}'", path.display()))?;

    let portfolio = parse_portfolio(&raw)
        .with_context(|| format!("Malformed portfolio data in '{}'", path.display()))?;

    info!(
        skills = portfolio.skills.len(),
        projects = portfolio.projects.len(),
        achievements = portfolio.achievements.len(),
        statistics = portfolio.statistics.len(),
        "Portfolio data loaded"
    );
    Ok(portfolio)
}

pub fn parse_portfolio(raw: &str) -> Result<Portfolio> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::ProjectStatus;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "personalInfo": { "name": "Ada", "title": "Student" },
        "skills": [{ "category": "Languages", "items": ["Rust"] }],
        "projects": [
            { "title": "Compiler", "status": "in-progress", "featured": true, "year": "2025",
              "technologies": ["Rust"], "liveDemo": "#" }
        ],
        "contact": { "email": "ada@example.com", "github": "github.com/ada" }
    }"##;

    #[test]
    fn test_parse_sample() {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        assert_eq!(portfolio.personal_info.name, "Ada");
        assert_eq!(portfolio.projects.len(), 1);
        assert!(portfolio.projects[0].featured);
        assert!(portfolio.achievements.is_empty());
        assert!(portfolio.statistics.is_empty());
    }

    #[test]
    fn test_unknown_status_loads_as_completed() {
        let raw = r#"{ "projects": [{ "title": "A", "status": "archived" }, { "title": "B" }] }"#;
        let portfolio = parse_portfolio(raw).unwrap();
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[0].status, ProjectStatus::Completed);
        assert_eq!(portfolio.projects[1].status, ProjectStatus::Completed);
    }

    #[test]
    fn test_sample_keeps_placeholder_demo_link() {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        assert_eq!(portfolio.projects[0].live_demo.as_deref(), Some("#"));
        assert!(portfolio.projects[0].actions().is_empty());
    }

    #[test]
    fn test_bundled_sample_parses() {
        let portfolio = parse_portfolio(include_str!("../data/portfolio.json")).unwrap();
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.projects.iter().filter(|p| p.featured).count(), 2);
        assert_eq!(portfolio.skills[4].icon_or_default(), "💡");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let portfolio = load_portfolio(file.path()).await.unwrap();
        assert_eq!(portfolio.contact.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let err = load_portfolio("/definitely/not/here.json")
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
