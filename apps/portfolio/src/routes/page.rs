use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Datelike;

use crate::errors::AppError;
use crate::models::Portfolio;
use crate::projects::handlers::ProjectParams;
use crate::render::render_page;
use crate::state::AppState;

/// GET /
///
/// The whole site. `filter`, `search` and `sort` pre-filter the project grid.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<ProjectParams>,
) -> Result<Html<String>, AppError> {
    let query = params.into_query()?;
    let year = chrono::Utc::now().year();
    Ok(Html(render_page(
        &state.portfolio,
        query.as_ref(),
        &state.fragments,
        year,
    )))
}

/// GET /api/v1/portfolio
///
/// The raw record the page is rendered from.
pub async fn portfolio_handler(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}
