use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Config;

/// Resolves keyword logo paths to asset URLs, once per `image_path`.
///
/// A logo that failed to load is remembered so later renders skip it.
#[derive(Debug, Default)]
pub struct IconCache {
    icons: HashMap<String, Option<Rc<str>>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached URL for `image_path`, resolving it on first use.
    /// `None` for an empty path or a logo known to be missing.
    pub fn resolve(&mut self, image_path: &str) -> Option<Rc<str>> {
        if image_path.is_empty() {
            return None;
        }
        self.icons
            .entry(image_path.to_string())
            .or_insert_with(|| Some(icon_url(image_path).into()))
            .clone()
    }

    /// Records that the logo at `image_path` could not be loaded
    pub fn mark_missing(&mut self, image_path: &str) {
        self.icons.insert(image_path.to_string(), None);
    }
}

fn icon_url(image_path: &str) -> String {
    format!(
        "{}/{}",
        Config::ASSET_DIR,
        image_path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_under_asset_dir() {
        let mut cache = IconCache::new();
        assert_eq!(cache.resolve("rust.svg").as_deref(), Some("assets/rust.svg"));
        assert_eq!(cache.resolve("/go.png").as_deref(), Some("assets/go.png"));
        assert_eq!(cache.resolve(""), None);
    }

    #[test]
    fn test_resolved_once_per_path() {
        let mut cache = IconCache::new();
        let first = cache.resolve("rust.svg").unwrap();
        let second = cache.resolve("rust.svg").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.icons.len(), 1);
    }

    #[test]
    fn test_missing_logo_is_not_requested_again() {
        let mut cache = IconCache::new();
        assert!(cache.resolve("unknown.png").is_some());

        cache.mark_missing("unknown.png");
        assert_eq!(cache.resolve("unknown.png"), None);
        // Other logos are unaffected
        assert!(cache.resolve("rust.svg").is_some());
    }
}
