//! Session configuration
//!
//! Defaults applied to every freshly created tab.

use serde::{Deserialize, Serialize};

use crate::request::{Method, SubTab};

/// A header seeded into every new tab as a locked row.
///
/// Pinned rows represent structurally required fields: they cannot be
/// deleted or reordered, and their key cannot be edited. Their value stays
/// editable (the Content-Type row tracks the active body type through it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedHeader {
    /// Header name.
    pub key: String,
    /// Initial header value.
    #[serde(default)]
    pub value: String,
}

impl PinnedHeader {
    /// Creates a pinned header seed.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Defaults for newly created tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDefaults {
    /// Display name given to new tabs.
    #[serde(default = "default_tab_name")]
    pub tab_name: String,

    /// Method preselected on new tabs.
    #[serde(default)]
    pub method: Method,

    /// Editor pane shown first on new tabs.
    #[serde(default)]
    pub sub_tab: SubTab,

    /// Locked header rows seeded after the initial blank row.
    #[serde(default = "default_pinned_headers")]
    pub pinned_headers: Vec<PinnedHeader>,
}

fn default_tab_name() -> String {
    "Untitled".to_string()
}

fn default_pinned_headers() -> Vec<PinnedHeader> {
    vec![PinnedHeader::new("Content-Type", "")]
}

impl Default for TabDefaults {
    fn default() -> Self {
        Self {
            tab_name: default_tab_name(),
            method: Method::default(),
            sub_tab: SubTab::default(),
            pinned_headers: default_pinned_headers(),
        }
    }
}
