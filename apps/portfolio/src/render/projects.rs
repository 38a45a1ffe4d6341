//! Project grid: controls, cards, count and empty state.

use crate::models::portfolio::ProjectAction;
use crate::models::Project;
use crate::projects::catalog::{
    count_label, CatalogEntry, ProjectFilter, ProjectQuery, SortKey, EMPTY_STATE_MESSAGE,
};
use crate::render::html_escape;

/// Filter buttons, search box and sort select, reflecting `query`.
pub fn render_controls(query: &ProjectQuery) -> String {
    let buttons: String = ProjectFilter::ALL
        .iter()
        .map(|f| {
            let active = if *f == query.filter { " active" } else { "" };
            format!(
                r#"<button class="filter-btn{active}" data-filter="{}">{}</button>"#,
                f.as_str(),
                f.label()
            )
        })
        .collect();

    let options: String = SortKey::ALL
        .iter()
        .map(|k| {
            let selected = if *k == query.sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                k.as_str(),
                k.label()
            )
        })
        .collect();

    format!(
        r#"<div class="projects-controls">
    <div class="project-filters">{buttons}</div>
    <input type="search" id="projectSearch" class="project-search" placeholder="Search projects..." value="{search}">
    <select id="projectSort" class="project-sort">{options}</select>
</div>
"#,
        search = html_escape(&query.search),
    )
}

/// Cards for `entries`, in the given order, followed by the count and the empty-state message.
pub fn render_grid(entries: &[CatalogEntry<'_>]) -> String {
    let cards: String = entries
        .iter()
        .map(|e| render_card(e.index, e.project))
        .collect();
    let hidden = if entries.is_empty() { "" } else { " hidden" };

    format!(
        r#"<div class="projects-grid" id="projectsContainer">{cards}</div>
<p class="project-count" id="projectCount">{count}</p>
<p class="no-results"{hidden}>{empty}</p>
"#,
        count = count_label(entries.len()),
        empty = EMPTY_STATE_MESSAGE,
    )
}

pub fn render_card(index: usize, project: &Project) -> String {
    let screenshot = project.screenshot();
    let image = match screenshot {
        Some(src) => format!(
            r#"<img src="{}" alt="{} Screenshot" class="project-screenshot" loading="lazy">"#,
            html_escape(src),
            html_escape(&project.title)
        ),
        None => format!(
            r#"<div class="project-placeholder">{}</div>"#,
            html_escape(&project.icon)
        ),
    };

    let featured_badge = if project.featured {
        r#"<div class="project-featured-badge">⭐ Featured</div>"#
    } else {
        ""
    };
    let year_badge = if project.year.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="project-year">📅 {}</div>"#,
            html_escape(&project.year)
        )
    };
    let status = project.status;
    let actions: String = project.actions().iter().map(render_action).collect();

    format!(
        r#"<div class="project-card{featured_class}" data-project="{index}" data-status="{status}" data-featured="{featured}" data-year="{year}" data-category="{category}" data-tech="{tech}" data-search="{search}">
    {featured_badge}
    <div class="project-image{has_screenshot}">
        <div class="project-icon-wrapper">{image}<div class="project-overlay"></div></div>
    </div>
    <div class="project-content">
        <div class="project-header">
            <h3 class="project-title">{title}</h3>
            <div class="project-badges">
                <div class="project-status {status_class}">{status_icon} {status_label}</div>
                {year_badge}
            </div>
        </div>
        <div class="project-actions">{actions}</div>
        <div class="project-footer">
            <button class="project-action-btn project-view-details-btn" data-project-index="{index}">
                <span class="btn-icon">👁️</span><span class="btn-text">View Details</span>
            </button>
        </div>
    </div>
</div>
"#,
        featured_class = if project.featured { " featured-project" } else { "" },
        status = status.as_str(),
        featured = project.featured,
        year = html_escape(&project.year),
        category = html_escape(&project.category),
        tech = html_escape(&project.tech_string()),
        search = html_escape(&project.search_text()),
        has_screenshot = if screenshot.is_some() { " has-screenshot" } else { "" },
        title = html_escape(&project.title),
        status_class = status.css_class(),
        status_icon = status.icon(),
        status_label = status.label(),
    )
}

fn render_action(action: &ProjectAction) -> String {
    format!(
        r#"<a href="{href}" class="project-action-btn {class}" target="_blank" rel="noopener noreferrer"><span class="btn-icon">{icon}</span><span class="btn-text">{label}</span></a>"#,
        href = html_escape(&action.href),
        class = action.kind.css_class(),
        icon = action.kind.icon(),
        label = html_escape(&action.label),
    )
}
