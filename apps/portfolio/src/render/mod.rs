//! Content renderer: turns the portfolio record into page HTML.
//!
//! Every function here is pure over its inputs (the year is passed in) except
//! `fragments::Fragments::load`, which reads optional override files from disk.

pub mod achievements;
pub mod contact;
pub mod fragments;
pub mod page;
pub mod projects;
pub mod skills;
pub mod stats;

pub use fragments::Fragments;
pub use page::render_page;

/// Escapes text for use in element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
