//! Axum route handlers for the section visibility API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interaction::visibility::{
    select_active_section, SectionGeometry, SectionScore, SelectionSource, Viewport,
};
use crate::models::Section;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ActiveSectionRequest {
    pub sections: Vec<SectionGeometry>,
    pub viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub struct ActiveSectionResponse {
    pub active: Section,
    pub source: SelectionSource,
    pub used_fallback: bool,
    /// `None` for sections without a nav link.
    pub nav_href: Option<String>,
    pub scores: Vec<SectionScore>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sections/active
///
/// Runs the visibility selector over measured section geometry.
pub async fn handle_active_section(
    Json(request): Json<ActiveSectionRequest>,
) -> Result<Json<ActiveSectionResponse>, AppError> {
    if request.viewport.height <= 0.0 {
        return Err(AppError::Validation(
            "viewport.height must be positive".to_string(),
        ));
    }

    let selection = select_active_section(&request.sections, &request.viewport);
    let active = selection.active;

    Ok(Json(ActiveSectionResponse {
        active,
        source: selection.source,
        used_fallback: selection.source != SelectionSource::Score,
        nav_href: Section::NAVIGABLE.contains(&active).then(|| active.href()),
        scores: selection.scores,
    }))
}
