//! Repository Summary
//!
//! One entry of the external repository listing. The upstream document is
//! passed through to the client as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoSummary(serde_json::Value);

impl RepoSummary {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Repository name, when the upstream entry has one
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(serde_json::Value::as_str)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}
