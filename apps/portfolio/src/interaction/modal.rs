use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Project detail modal. While open, page scrolling is locked.
#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    project_count: usize,
    open: Option<usize>,
}

impl ProjectModal {
    pub fn new(project_count: usize) -> Self {
        ProjectModal {
            project_count,
            open: None,
        }
    }

    /// Opens the modal for the project at its source-list index. Unknown indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.project_count {
            return false;
        }
        self.open = Some(index);
        true
    }

    pub fn close(&mut self, _trigger: CloseTrigger) -> Option<usize> {
        self.open.take()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }
}
