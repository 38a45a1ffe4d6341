//! Project catalog — derives the displayed subset and order of the project list.
//!
//! Three independent controls compose in a fixed order on every query:
//! 1. filter (single-select)
//! 2. free-text search (case-insensitive substring)
//! 3. sort (stable)
//!
//! Year and title ordering is plain lexical `str` ordering. Four-digit years sort the same as
//! numbers; anything else sorts by string rules.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectStatus};

// ────────────────────────────────────────────────────────────────────────────
// Controls
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Completed,
    InProgress,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Featured,
        ProjectFilter::Completed,
        ProjectFilter::InProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Featured => "featured",
            ProjectFilter::Completed => "completed",
            ProjectFilter::InProgress => "in-progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::Completed => "Completed",
            ProjectFilter::InProgress => "In Progress",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Completed => project.status == ProjectStatus::Completed,
            ProjectFilter::InProgress => project.status == ProjectStatus::InProgress,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Featured,
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Featured,
        SortKey::Alphabetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Featured => "featured",
            SortKey::Alphabetical => "alphabetical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Featured => "Featured First",
            SortKey::Alphabetical => "A-Z",
        }
    }

    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortKey::Newest => b.year.cmp(&a.year),
            SortKey::Oldest => a.year.cmp(&b.year),
            SortKey::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.year.cmp(&a.year)),
            SortKey::Alphabetical => a.title.cmp(&b.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownControl {
    pub control: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.control, self.value)
    }
}

impl FromStr for ProjectFilter {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownControl {
                control: "filter",
                value: s.to_string(),
            })
    }
}

impl FromStr for SortKey {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownControl {
                control: "sort",
                value: s.to_string(),
            })
    }
}

/// The transient filter state. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectQuery {
    pub filter: ProjectFilter,
    pub search: String,
    pub sort: SortKey,
}

impl ProjectQuery {
    /// Order of the page before any control is touched: featured first, then newest.
    pub fn initial() -> Self {
        ProjectQuery {
            sort: SortKey::Featured,
            ..Default::default()
        }
    }

    /// Search term as matched: trimmed and lowercased.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Query execution
// ────────────────────────────────────────────────────────────────────────────

/// A project paired with its position in the source list.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub index: usize,
    pub project: &'a Project,
}

#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    pub entries: Vec<CatalogEntry<'a>>,
}

pub const EMPTY_STATE_MESSAGE: &str = "No projects found matching your criteria.";

impl QueryResult<'_> {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_label(&self) -> String {
        count_label(self.count())
    }

    #[cfg(test)]
    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.index).collect()
    }
}

/// "1 project" / "N projects".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 project".to_string()
    } else {
        format!("{count} projects")
    }
}

/// Runs filter → search → sort over the source list.
pub fn run_query<'a>(projects: &'a [Project], query: &ProjectQuery) -> QueryResult<'a> {
    let term = query.normalized_search();

    let mut entries: Vec<CatalogEntry<'a>> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| query.filter.matches(p))
        .filter(|(_, p)| term.is_empty() || p.search_text().contains(&term))
        .map(|(index, project)| CatalogEntry { index, project })
        .collect();

    // `sort_by` is stable, so equal keys keep source order.
    entries.sort_by(|a, b| query.sort.compare(a.project, b.project));

    QueryResult { entries }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
