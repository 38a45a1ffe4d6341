//! Optional HTML fragments that override built-in page pieces.
//!
//! A fragment that is missing or unreadable resolves to the empty string and the page uses its
//! built-in markup instead.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

/// Fragment files looked up in the components directory, without the `.html` extension.
pub const FRAGMENT_NAMES: [&str; 4] = ["head", "navbar", "about", "footer"];

#[derive(Debug, Clone, Default)]
pub struct Fragments {
    by_name: HashMap<String, String>,
}

impl Fragments {
    pub async fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut by_name = HashMap::new();
        for name in FRAGMENT_NAMES {
            let html = load_fragment(dir, name).await;
            if !html.trim().is_empty() {
                by_name.insert(name.to_string(), html);
            }
        }
        debug!(loaded = by_name.len(), dir = %dir.display(), "Fragments loaded");
        Fragments { by_name }
    }

    #[cfg(test)]
    pub fn insert(&mut self, name: &str, html: impl Into<String>) {
        self.by_name.insert(name.to_string(), html.into());
    }

    /// The fragment's HTML, or `""` when it was not loaded.
    pub fn get(&self, name: &str) -> &str {
        self.by_name.get(name).map(String::as_str).unwrap_or("")
    }

    /// The fragment if present, else `fallback()`.
    pub fn or_else(&self, name: &str, fallback: impl FnOnce() -> String) -> String {
        match self.by_name.get(name) {
            Some(html) => html.clone(),
            None => fallback(),
        }
    }
}

/// Reads `<dir>/<name>.html`. Failures are logged and yield `""`.
pub async fn load_fragment(dir: &Path, name: &str) -> String {
    let path = dir.join(format!("{name}.html"));
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load fragment");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_fragment_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_fragment(dir.path(), "navbar").await, "");
    }

    #[tokio::test]
    async fn test_load_present_fragments_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer>custom</footer>").unwrap();
        std::fs::write(dir.path().join("about.html"), "   ").unwrap();

        let fragments = Fragments::load(dir.path()).await;
        assert_eq!(fragments.get("footer"), "<footer>custom</footer>");
        assert_eq!(fragments.get("about"), "");
        assert_eq!(fragments.get("navbar"), "");
        assert_eq!(fragments.or_else("navbar", || "built-in".to_string()), "built-in");
    }
}
