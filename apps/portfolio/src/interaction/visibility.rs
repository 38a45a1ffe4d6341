//! Section Visibility Selector — decides which single section is active.
//!
//! Scoring per section (only sections intersecting the viewport score; the rest get 0):
//! - base: visibility ratio × 100
//! - proximity: up to +50, linear in how close the section top is to the navbar offset
//!   (within 150px)
//! - position: +30 when the section top sits in the upper half of the viewport
//!
//! Highest score wins, first in document order on ties. When nothing scores above zero the
//! selector falls back to scroll-offset containment, then to `home`.

use serde::{Deserialize, Serialize};

use crate::models::Section;

pub const PROXIMITY_WINDOW_PX: f64 = 150.0;
pub const PROXIMITY_BONUS: f64 = 50.0;
pub const UPPER_HALF_BONUS: f64 = 30.0;
pub const FALLBACK_SLACK_PX: f64 = 50.0;
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 80.0;

// ────────────────────────────────────────────────────────────────────────────
// Geometry inputs
// ────────────────────────────────────────────────────────────────────────────

/// Layout of one section at the moment of measurement.
///
/// `rect_*` are relative to the viewport (bounding client rect); `offset_*` are relative to the
/// document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SectionGeometry {
    pub section: Section,
    pub rect_top: f64,
    pub rect_height: f64,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionGeometry {
    /// Builds geometry from document layout and the current scroll position.
    pub fn from_layout(section: Section, offset_top: f64, height: f64, scroll_y: f64) -> Self {
        SectionGeometry {
            section,
            rect_top: offset_top - scroll_y,
            rect_height: height,
            offset_top,
            offset_height: height,
        }
    }

    pub fn rect_bottom(&self) -> f64 {
        self.rect_top + self.rect_height
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    #[serde(default = "default_navbar_height")]
    pub navbar_height: f64,
}

fn default_navbar_height() -> f64 {
    DEFAULT_NAVBAR_HEIGHT
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn intersects_viewport(geometry: &SectionGeometry, viewport: &Viewport) -> bool {
    geometry.rect_top < viewport.height && geometry.rect_bottom() > 0.0
}

/// Fraction of the section's height inside the viewport, in [0, 1].
pub fn visibility_ratio(geometry: &SectionGeometry, viewport: &Viewport) -> f64 {
    let height = geometry.rect_height;
    if height <= 0.0 {
        return 0.0;
    }
    let visible_top = (-geometry.rect_top).max(0.0);
    let visible_bottom = height.min(viewport.height - geometry.rect_top);
    let visible = (visible_bottom - visible_top).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

pub fn score_section(geometry: &SectionGeometry, viewport: &Viewport) -> f64 {
    if !intersects_viewport(geometry, viewport) {
        return 0.0;
    }

    let mut score = visibility_ratio(geometry, viewport) * 100.0;

    let distance = (geometry.rect_top - viewport.navbar_height).abs();
    if distance < PROXIMITY_WINDOW_PX {
        score += (PROXIMITY_WINDOW_PX - distance) / PROXIMITY_WINDOW_PX * PROXIMITY_BONUS;
    }

    if geometry.rect_top >= 0.0 && geometry.rect_top < viewport.height * 0.5 {
        score += UPPER_HALF_BONUS;
    }

    score
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionScore {
    pub section: Section,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    Score,
    ScrollContainment,
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub active: Section,
    pub source: SelectionSource,
    pub scores: Vec<SectionScore>,
}

/// Picks the active section for the given layout. `sections` must be in document order.
pub fn select_active_section(sections: &[SectionGeometry], viewport: &Viewport) -> Selection {
    let scores: Vec<SectionScore> = sections
        .iter()
        .map(|g| SectionScore {
            section: g.section,
            score: score_section(g, viewport),
        })
        .collect();

    let mut best: Option<&SectionScore> = None;
    for candidate in &scores {
        // Strict comparison keeps the earliest section on ties.
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    if let Some(best) = best.filter(|b| b.score > 0.0) {
        return Selection {
            active: best.section,
            source: SelectionSource::Score,
            scores,
        };
    }

    if let Some(section) = containing_section(sections, viewport) {
        return Selection {
            active: section,
            source: SelectionSource::ScrollContainment,
            scores,
        };
    }

    Selection {
        active: Section::Home,
        source: SelectionSource::Default,
        scores,
    }
}

/// Scroll-offset containment check. The last matching section in document order wins.
fn containing_section(sections: &[SectionGeometry], viewport: &Viewport) -> Option<Section> {
    let scroll_y = viewport.scroll_y;
    let nav = viewport.navbar_height;
    sections
        .iter()
        .filter(|g| {
            let top = g.offset_top;
            let bottom = top + g.offset_height;
            scroll_y >= top - nav - FALLBACK_SLACK_PX && scroll_y < bottom - nav + FALLBACK_SLACK_PX
        })
        .last()
        .map(|g| g.section)
}

// ────────────────────────────────────────────────────────────────────────────
// Visible-class bookkeeping
// ────────────────────────────────────────────────────────────────────────────

/// A class mutation the page must perform to reflect the active section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ClassChange {
    ShowSection { section: Section },
    HideSection { section: Section },
    ActivateNavLink { href: String },
    DeactivateNavLink { href: String },
}

/// Tracks which section carries `visible` and which nav link carries `active`.
///
/// At most one section is visible at any time.
#[derive(Debug, Clone, Default)]
pub struct SectionVisibility {
    visible: Option<Section>,
    nav_active: Option<Section>,
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Option<Section> {
        self.visible
    }

    pub fn active_nav_href(&self) -> Option<String> {
        self.nav_active.map(|s| s.href())
    }

    /// Makes `active` the only visible section and returns the class changes needed.
    pub fn apply(&mut self, active: Section) -> Vec<ClassChange> {
        let mut changes = Vec::new();

        if self.visible != Some(active) {
            if let Some(previous) = self.visible {
                changes.push(ClassChange::HideSection { section: previous });
            }
            changes.push(ClassChange::ShowSection { section: active });
            self.visible = Some(active);
        }

        // Sections without a nav link (statistics) clear the highlight.
        let nav_target = Section::NAVIGABLE.contains(&active).then_some(active);
        if self.nav_active != nav_target {
            if let Some(previous) = self.nav_active {
                changes.push(ClassChange::DeactivateNavLink {
                    href: previous.href(),
                });
            }
            if let Some(next) = nav_target {
                changes.push(ClassChange::ActivateNavLink { href: next.href() });
            }
            self.nav_active = nav_target;
        }

        changes
    }

    pub fn reset(&mut self) {
        self.visible = None;
        self.nav_active = None;
    }
}
