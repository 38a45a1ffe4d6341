//! Axum route handlers for the Projects API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::portfolio::ProjectAction;
use crate::models::{Project, ProjectStatus};
use crate::projects::catalog::{run_query, ProjectQuery, UnknownControl, EMPTY_STATE_MESSAGE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw query-string controls. Absent or blank values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectParams {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ProjectParams {
    fn is_empty(&self) -> bool {
        [&self.filter, &self.search, &self.sort]
            .iter()
            .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// `None` when no control was given at all.
    pub fn into_query(self) -> Result<Option<ProjectQuery>, AppError> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut query = ProjectQuery::default();
        if let Some(filter) = self.filter.as_deref().filter(|s| !s.trim().is_empty()) {
            query.filter = filter.trim().parse().map_err(invalid_control)?;
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            query.sort = sort.trim().parse().map_err(invalid_control)?;
        }
        query.search = self.search.unwrap_or_default();
        Ok(Some(query))
    }
}

fn invalid_control(e: UnknownControl) -> AppError {
    AppError::Validation(e.to_string())
}

#[derive(Debug, Serialize)]
pub struct ProjectEntry {
    pub index: usize,
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectEntry>,
    pub count: usize,
    pub count_label: String,
    pub empty: bool,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StatusBadge {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub icon: &'static str,
    pub class: String,
}

/// Everything the project modal shows.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub index: usize,
    pub project: Project,
    pub status_badge: StatusBadge,
    pub featured: bool,
    pub year: Option<String>,
    pub screenshot: Option<String>,
    pub actions: Vec<ProjectAction>,
}

impl ProjectDetailResponse {
    fn new(index: usize, project: &Project) -> Self {
        let status = project.status;
        ProjectDetailResponse {
            index,
            status_badge: StatusBadge {
                status,
                label: status.label(),
                icon: status.icon(),
                class: status.css_class(),
            },
            featured: project.featured,
            year: Some(project.year.clone()).filter(|y| !y.is_empty()),
            screenshot: project.screenshot().map(str::to_string),
            actions: project.actions(),
            project: project.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/projects?filter=&search=&sort=
///
/// Runs filter → search → sort. Results carry the project's position in the source list.
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectParams>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let query = params.into_query()?.unwrap_or_default();
    let result = run_query(&state.portfolio.projects, &query);

    tracing::debug!(
        filter = query.filter.as_str(),
        sort = query.sort.as_str(),
        search = %query.search,
        matched = result.count(),
        "Project query"
    );

    let response = ProjectListResponse {
        projects: result
            .entries
            .iter()
            .map(|e| ProjectEntry {
                index: e.index,
                project: e.project.clone(),
            })
            .collect(),
        count: result.count(),
        count_label: result.count_label(),
        empty: result.is_empty(),
        empty_message: result.is_empty().then_some(EMPTY_STATE_MESSAGE),
    };

    Ok(Json(response))
}

/// GET /api/v1/projects/:index
///
/// Modal payload for the project at `index` in the source list.
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = state
        .portfolio
        .projects
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("Project {index} not found")))?;

    Ok(Json(ProjectDetailResponse::new(index, project)))
}
