/// Ordered, duplicate-free set of selected keyword values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    keywords: Vec<String>,
}

impl Selection {
    /// Builds a selection from the selector's output, dropping repeats but keeping first-seen order
    pub fn new(keywords: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            if !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }
        Self { keywords: unique }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Appends `keyword` unless it is already selected
    pub fn with_added(&self, keyword: &str) -> Self {
        let mut keywords = self.keywords.clone();
        if !self.contains(keyword) {
            keywords.push(keyword.to_string());
        }
        Self { keywords }
    }

    pub fn with_removed(&self, keyword: &str) -> Self {
        Self {
            keywords: self
                .keywords
                .iter()
                .filter(|k| *k != keyword)
                .cloned()
                .collect(),
        }
    }
}

/// The (keyword, month) pair picked by clicking a trend point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDownTarget {
    pub keyword: String,
    pub year_month: String,
}

impl DrillDownTarget {
    pub fn new(keyword: impl Into<String>, year_month: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            year_month: year_month.into(),
        }
    }

    /// A target is only shown while its keyword is still selected
    pub fn is_visible_in(&self, selection: &Selection) -> bool {
        selection.contains(&self.keyword)
    }
}

/// Returns the target to display, if any
pub fn visible_target<'a>(
    selection: &Selection,
    target: Option<&'a DrillDownTarget>,
) -> Option<&'a DrillDownTarget> {
    target.filter(|t| t.is_visible_in(selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(keywords: &[&str]) -> Selection {
        Selection::new(keywords.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_new_drops_duplicates() {
        let s = selection(&["rust", "golang", "rust"]);
        assert_eq!(s.keywords(), &["rust".to_string(), "golang".to_string()]);
    }

    #[test]
    fn test_add_and_remove_keep_order() {
        let s = selection(&["rust"]).with_added("golang").with_added("python");
        assert_eq!(s.keywords(), &["rust", "golang", "python"]);

        let s = s.with_added("rust");
        assert_eq!(s.keywords().len(), 3);

        let s = s.with_removed("golang");
        assert_eq!(s.keywords(), &["rust", "python"]);
    }

    #[test]
    fn test_target_hidden_after_deselect() {
        let target = DrillDownTarget::new("rust", "2024-01");
        let s = selection(&["rust", "golang"]);
        assert_eq!(visible_target(&s, Some(&target)), Some(&target));

        let s = s.with_removed("rust");
        assert_eq!(visible_target(&s, Some(&target)), None);

        // reselecting brings the same target back without a new click
        let s = s.with_added("rust");
        assert_eq!(visible_target(&s, Some(&target)), Some(&target));
    }

    #[test]
    fn test_no_target_never_visible() {
        assert_eq!(visible_target(&selection(&["rust"]), None), None);
    }
}
