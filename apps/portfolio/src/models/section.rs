use serde::{Deserialize, Serialize};

/// A named region of the single page, in document order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    Statistics,
    About,
    Skills,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    /// Every rendered section in document order.
    #[cfg(test)]
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Statistics,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Contact,
    ];

    /// Sections reachable from the navbar.
    pub const NAVIGABLE: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Statistics => "statistics",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Statistics => "Statistics",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }

    /// The anchor a nav link uses to point at this section.
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}
