//! Display styles: how the cursor state maps to a visible window.
//!
//! Each style is a pure function of `(len, height, selected)`. The pager only
//! asks for a window when the sequence is non-empty and the selection is in
//! range, so the algorithms below may rely on `selected < len` and
//! `height >= 1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PagerError;
use crate::window::Window;

/// Where the selection sits relative to the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStyle {
    /// Windows follow fixed page boundaries (multiples of the height).
    #[default]
    FixedPage,
    /// The selected element is always the first visible row.
    TopAnchored,
    /// The selected element is the last visible row once enough rows precede it.
    BottomAnchored,
}

impl DisplayStyle {
    pub const ALL: [DisplayStyle; 3] = [
        DisplayStyle::FixedPage,
        DisplayStyle::TopAnchored,
        DisplayStyle::BottomAnchored,
    ];

    /// Compute the window for a selection within a sequence of `len` elements.
    pub fn window(self, len: usize, height: usize, selected: usize) -> Window {
        debug_assert!(height > 0 && selected < len);
        match self {
            DisplayStyle::FixedPage => fixed_page(len, height, selected),
            DisplayStyle::TopAnchored => top_anchored(len, height, selected),
            DisplayStyle::BottomAnchored => bottom_anchored(len, height, selected),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayStyle::FixedPage => "fixed-page",
            DisplayStyle::TopAnchored => "top-anchored",
            DisplayStyle::BottomAnchored => "bottom-anchored",
        }
    }
}

fn fixed_page(len: usize, height: usize, selected: usize) -> Window {
    let from = (selected / height) * height;
    let to = from.saturating_add(height).min(len);
    Window::new(from, to, selected - from)
}

fn top_anchored(len: usize, height: usize, selected: usize) -> Window {
    let to = selected.saturating_add(height).min(len);
    Window::new(selected, to, 0)
}

fn bottom_anchored(len: usize, height: usize, selected: usize) -> Window {
    if selected < height {
        return Window::new(0, height.min(len), selected);
    }

    // Enough rows above: pin the selection to the last row.
    let to = selected + 1;
    let from = to - height;
    Window::new(from, to, selected - from)
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayStyle {
    type Err = PagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-page" | "fixed_page" | "fixedpage" | "fixed" | "page" => Ok(DisplayStyle::FixedPage),
            "top-anchored" | "top_anchored" | "top" => Ok(DisplayStyle::TopAnchored),
            "bottom-anchored" | "bottom_anchored" | "bottom" => Ok(DisplayStyle::BottomAnchored),
            _ => Err(PagerError::UnknownStyle(s.to_string())),
        }
    }
}
