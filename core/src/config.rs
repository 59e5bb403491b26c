//! Construction options for a [`Pager`](crate::Pager).
//!
//! Options are plain fields with defaults; the chainable setters apply in call
//! order, so a later setter overrides an earlier one:
//!
//! ```rust
//! use libpager_core::{DisplayStyle, PagerConfig};
//!
//! let config = PagerConfig::default().top_anchored().pre_select(3).bottom_anchored();
//! assert_eq!(config.style, DisplayStyle::BottomAnchored);
//! assert_eq!(config.pre_select, Some(3));
//! ```
//!
//! The config can also be read from TOML, e.g.
//!
//! ```toml
//! style = "top-anchored"
//! pre_select = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::DisplayStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Window computation strategy (default: fixed pages)
    pub style: DisplayStyle,

    /// Initially selected index. Not validated against the sequence length;
    /// an out-of-range value shows up as the empty window until navigation
    /// brings the selection back in range.
    pub pre_select: Option<usize>,
}

impl PagerConfig {
    /// Select `index` when the pager is created.
    pub fn pre_select(mut self, index: usize) -> Self {
        self.pre_select = Some(index);
        self
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Keep fixed page boundaries (the default).
    pub fn fixed_page(self) -> Self {
        self.style(DisplayStyle::FixedPage)
    }

    /// Keep the selected element at the top of the window.
    pub fn top_anchored(self) -> Self {
        self.style(DisplayStyle::TopAnchored)
    }

    /// Keep the selected element at the bottom of the window.
    pub fn bottom_anchored(self) -> Self {
        self.style(DisplayStyle::BottomAnchored)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
