use serde::{Deserialize, Serialize};

/// Option namespace for the keyword selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeywordDomain {
    /// Keywords tracked in submission titles
    #[default]
    Submissions,
    /// Keywords tracked in "Who is hiring" comments
    Hiring,
}

impl KeywordDomain {
    /// Value of the `hiring` query flag on `/keywords`
    pub fn is_hiring(&self) -> bool {
        matches!(self, Self::Hiring)
    }

    /// Path of the occurrence series endpoint for this domain
    pub fn occurrences_path(&self) -> &'static str {
        match self {
            Self::Submissions => "/submissions/occurrences",
            Self::Hiring => "/hiring/occurrences",
        }
    }

    /// Only submission trends have a samples endpoint to drill into
    pub fn supports_drill_down(&self) -> bool {
        matches!(self, Self::Submissions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordOption {
    pub value: String,
    pub display_name: String,
    pub image_path: String,
}

/// Looks up the display name for a keyword value, falling back to the raw value
pub fn display_name<'a>(options: &'a [KeywordOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or(value, |o| o.display_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_deserialization_ignores_extra_fields() {
        let json = r#"[{
            "value": "rust",
            "display_name": "Rust",
            "include_hiring": true,
            "image_path": "rust.svg"
        }]"#;

        let options: Vec<KeywordOption> = serde_json::from_str(json).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "rust");
        assert_eq!(options[0].display_name, "Rust");
        assert_eq!(options[0].image_path, "rust.svg");
    }

    #[test]
    fn test_display_name_fallback() {
        let options = vec![KeywordOption {
            value: "golang".to_string(),
            display_name: "Go".to_string(),
            image_path: "go.svg".to_string(),
        }];
        assert_eq!(display_name(&options, "golang"), "Go");
        assert_eq!(display_name(&options, "zig"), "zig");
    }

    #[test]
    fn test_domain_paths() {
        assert_eq!(
            KeywordDomain::Submissions.occurrences_path(),
            "/submissions/occurrences"
        );
        assert_eq!(KeywordDomain::Hiring.occurrences_path(), "/hiring/occurrences");
        assert!(KeywordDomain::Submissions.supports_drill_down());
        assert!(!KeywordDomain::Hiring.supports_drill_down());
    }
}
