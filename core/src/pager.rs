//! Selection cursor with single-step and page-step navigation.
//!
//! The pager never sees the paged data. It is built from the length of the
//! caller's sequence and the number of rows that fit on screen, tracks which
//! element is selected, and hands back the window the caller should slice out
//! of its own sequence.
//!
//! A pager is tied to one `(height, len)` pair. When either changes, build a
//! new one.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::config::PagerConfig;
use crate::error::{PagerError, Result};
use crate::style::DisplayStyle;
use crate::window::Window;

/// Paging cursor over an externally owned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    /// Length of the paged sequence
    len: usize,

    /// Number of elements visible at once (always >= 1)
    height: usize,

    /// Selected index; `None` only for an empty sequence
    selected: Option<usize>,

    /// Index of the last page, `len / height`, computed once
    last_page: usize,

    /// Window computation strategy
    style: DisplayStyle,
}

impl Pager {
    /// Create a fixed-page pager with the first element selected.
    pub fn new(height: usize, len: usize) -> Result<Self> {
        Self::with_config(height, len, PagerConfig::default())
    }

    /// Create a pager with explicit options.
    ///
    /// Fails with [`PagerError::ZeroHeight`] when `height` is 0. A
    /// pre-selection is ignored for an empty sequence and otherwise accepted
    /// as-is, even when it lies past the end.
    pub fn with_config(height: usize, len: usize, config: PagerConfig) -> Result<Self> {
        if height == 0 {
            return Err(PagerError::ZeroHeight);
        }

        let selected = if len == 0 {
            if let Some(index) = config.pre_select {
                warn!(index, "ignoring pre-selection for empty sequence");
            }
            None
        } else {
            let index = config.pre_select.unwrap_or(0);
            if index >= len {
                warn!(index, len, "pre-selected index is past the end of the sequence");
            }
            Some(index)
        };

        let pager = Self {
            len,
            height,
            selected,
            last_page: len / height,
            style: config.style,
        };
        debug!(height, len, style = %pager.style, selected = ?pager.selected, "created pager");
        Ok(pager)
    }

    /// Get the length of the paged sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of elements shown per window.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Get the selected index, or `None` for an empty sequence.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Get the page (0-based) holding the selection; 0 when nothing is selected.
    pub fn current_page(&self) -> usize {
        self.selected.map_or(0, |index| index / self.height)
    }

    /// Get the total number of pages, counting a partial last page.
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.height)
    }

    /// Get the highest page index `page_down` can leave from, `len / height`.
    ///
    /// Equals `page_count()` when the length is a multiple of the height.
    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// Select the next element.
    /// Returns true if the selection moved.
    pub fn next(&mut self) -> bool {
        match self.selected {
            Some(index) if index < self.len.saturating_sub(1) => {
                self.select(index + 1, "next");
                true
            }
            _ => false,
        }
    }

    /// Select the previous element.
    /// Returns true if the selection moved.
    pub fn prev(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => {
                self.select(index - 1, "prev");
                true
            }
            _ => false,
        }
    }

    /// Select the last element of the next page, clamped to the end of the
    /// sequence.
    /// Returns true whenever a following page was reachable, including when
    /// the clamp lands back on the current index.
    pub fn page_down(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }

        let page = self.current_page();
        if page >= self.last_page {
            return false;
        }

        let target = page
            .saturating_add(2)
            .saturating_mul(self.height)
            .saturating_sub(1)
            .min(self.len - 1);
        self.select(target, "page_down");
        true
    }

    /// Move the selection one full page up.
    /// Returns true if the selection moved.
    pub fn page_up(&mut self) -> bool {
        let page = self.current_page();
        match self.selected {
            // page > 0 means index >= height
            Some(index) if page > 0 => {
                self.select(index - self.height, "page_up");
                true
            }
            _ => false,
        }
    }

    /// Apply a navigation motion.
    /// Returns true if the selection changed.
    pub fn apply(&mut self, motion: Motion) -> bool {
        match motion {
            Motion::Next => self.next(),
            Motion::Prev => self.prev(),
            Motion::PageDown => self.page_down(),
            Motion::PageUp => self.page_up(),
        }
    }

    /// Get the window to display, or `None` when there is nothing to show
    /// (empty sequence or a selection past the end).
    pub fn window(&self) -> Option<Window> {
        match self.selected {
            Some(index) if index < self.len => Some(self.style.window(self.len, self.height, index)),
            _ => None,
        }
    }

    /// Get the `(from, to, selected)` triple for the current window.
    ///
    /// `selected` is counted from `from`, so the highlighted element of the
    /// underlying data is at `from + selected`. Returns `(-1, -1, -1)` when
    /// there is nothing to show.
    pub fn indexes(&self) -> (isize, isize, isize) {
        self.window()
            .map_or(Window::SENTINEL_INDEXES, |window| window.as_indexes())
    }

    fn select(&mut self, index: usize, motion: &'static str) {
        trace!(motion, from = ?self.selected, to = index, "selection moved");
        self.selected = Some(index);
    }
}

/// A single navigation step, for callers that map input keys to motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Next,
    Prev,
    PageDown,
    PageUp,
}

impl Motion {
    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Next => "next",
            Motion::Prev => "prev",
            Motion::PageDown => "page-down",
            Motion::PageUp => "page-up",
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motion {
    type Err = PagerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "down" | "j" => Ok(Motion::Next),
            "prev" | "up" | "k" => Ok(Motion::Prev),
            "page-down" | "page_down" | "pagedown" | "pgdn" => Ok(Motion::PageDown),
            "page-up" | "page_up" | "pageup" | "pgup" => Ok(Motion::PageUp),
            _ => Err(PagerError::UnknownMotion(s.to_string())),
        }
    }
}
