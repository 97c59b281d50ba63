//! Toolbar entries and the versioned sequence they are supplied in.
//!
//! A [`ToolOption`] is one toolbar entry. Entries that carry a `children`
//! collection open a nested menu and take precedence during fitting (see
//! [`crate::fit::is_overflowed_by_child`]).
//!
//! Options are handed to the fitter as an [`OptionSet`]: the ordered entries
//! plus an `epoch` the host bumps whenever the set changes structurally.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// One toolbar entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolOption {
    /// Stable identifier for the entry.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Icon reference (theme name or resource path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Nested entries. Presence alone marks the entry as child-bearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ToolOption>>,
}

impl ToolOption {
    /// Create an entry with an id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: None,
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the nested entries using builder pattern.
    pub fn with_children(mut self, children: Vec<ToolOption>) -> Self {
        self.children = Some(children);
        self
    }

    /// Whether this entry carries a children collection.
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

/// The ordered toolbar entries for one epoch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionSet {
    /// Version counter. A different epoch invalidates captured geometry.
    #[serde(default)]
    pub epoch: u64,
    /// Entries in display order.
    #[serde(default, rename = "option")]
    pub options: Vec<ToolOption>,
}

impl OptionSet {
    /// Create a set for the given epoch.
    pub fn new(epoch: u64, options: Vec<ToolOption>) -> Self {
        Self { epoch, options }
    }

    /// Parse a set from TOML.
    ///
    /// ```
    /// use toolbar_overflow::OptionSet;
    ///
    /// let set = OptionSet::from_toml_str(r#"
    /// epoch = 3
    ///
    /// [[option]]
    /// id = "open"
    /// label = "Open"
    ///
    /// [[option]]
    /// id = "export"
    /// label = "Export"
    /// children = [{ id = "pdf", label = "PDF" }]
    /// "#).unwrap();
    ///
    /// assert_eq!(set.epoch, 3);
    /// assert!(set.options[1].has_children());
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
