//! Skills Value Object
//!
//! Parsed from a single comma-separated string. Each segment is trimmed
//! and kept in order, so `"Rust, , Go"` yields three entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(Vec<String>);

impl Skills {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Skills {
    fn from(skills: Vec<String>) -> Self {
        Self(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_each_segment() {
        let skills = Skills::parse("Rust, Go ,  SQL");
        assert_eq!(skills.as_slice(), ["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let skills = Skills::parse("Rust,, ,Go,");
        assert_eq!(skills.as_slice(), ["Rust", "", "", "Go", ""]);
    }

    #[test]
    fn test_parse_separator_only() {
        assert_eq!(Skills::parse(",").as_slice(), ["", ""]);
        assert_eq!(Skills::parse("").as_slice(), [""]);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Skills::parse("a,b")).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
