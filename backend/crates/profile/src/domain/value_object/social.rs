//! Social Links Value Object
//!
//! A fixed set of platforms, each holding at most one URL. Updates merge
//! per platform: unmentioned platforms keep their stored link.

use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::field_update::FieldUpdate;

/// Supported social platforms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[display("youtube")]
    Youtube,
    #[display("twitter")]
    Twitter,
    #[display("facebook")]
    Facebook,
    #[display("linkedin")]
    Linkedin,
    #[display("instagram")]
    Instagram,
}

/// Stored social links, serialized as `{"youtube": "...", ...}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(BTreeMap<SocialPlatform, String>);

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge a patch in place
    pub fn apply(&mut self, patch: SocialPatch) {
        for (platform, update) in patch.0 {
            match update {
                FieldUpdate::Keep => {}
                FieldUpdate::Set(url) => {
                    self.0.insert(platform, url);
                }
                FieldUpdate::Clear => {
                    self.0.remove(&platform);
                }
            }
        }
    }
}

/// Per-platform changes requested by one update
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialPatch(BTreeMap<SocialPlatform, FieldUpdate<String>>);

impl SocialPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw input for one platform (`None` leaves it out of the patch)
    pub fn with(mut self, platform: SocialPlatform, raw: Option<String>) -> Self {
        let update = FieldUpdate::from_input(raw);
        if !update.is_keep() {
            self.0.insert(platform, update);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(pairs: &[(SocialPlatform, &str)]) -> SocialLinks {
        let mut stored = SocialLinks::default();
        let mut patch = SocialPatch::new();
        for (platform, url) in pairs {
            patch = patch.with(*platform, Some(url.to_string()));
        }
        stored.apply(patch);
        stored
    }

    #[test]
    fn test_display_matches_wire_name() {
        for platform in [
            SocialPlatform::Youtube,
            SocialPlatform::Twitter,
            SocialPlatform::Facebook,
            SocialPlatform::Linkedin,
            SocialPlatform::Instagram,
        ] {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform));
        }
    }

    #[test]
    fn test_merge_keeps_unmentioned_platforms() {
        let mut stored = links(&[
            (SocialPlatform::Twitter, "https://twitter.com/a"),
            (SocialPlatform::Youtube, "https://youtube.com/a"),
        ]);

        stored.apply(SocialPatch::new().with(
            SocialPlatform::Twitter,
            Some("https://twitter.com/b".to_string()),
        ));

        assert_eq!(stored.get(SocialPlatform::Twitter), Some("https://twitter.com/b"));
        assert_eq!(stored.get(SocialPlatform::Youtube), Some("https://youtube.com/a"));
    }

    #[test]
    fn test_blank_clears_one_platform() {
        let mut stored = links(&[
            (SocialPlatform::Twitter, "https://twitter.com/a"),
            (SocialPlatform::Linkedin, "https://linkedin.com/in/a"),
        ]);

        stored.apply(SocialPatch::new().with(SocialPlatform::Twitter, Some(String::new())));

        assert_eq!(stored.get(SocialPlatform::Twitter), None);
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_absent_input_is_not_recorded() {
        let patch = SocialPatch::new().with(SocialPlatform::Facebook, None);
        assert!(patch.is_empty());
    }

    #[test]
    fn test_serializes_as_object() {
        let stored = links(&[(SocialPlatform::Instagram, "https://instagram.com/a")]);
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json, serde_json::json!({"instagram": "https://instagram.com/a"}));

        let back: SocialLinks = serde_json::from_value(json).unwrap();
        assert_eq!(back, stored);
    }
}
