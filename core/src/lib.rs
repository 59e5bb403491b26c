//! libpager-core
//!
//! A data-agnostic paging cursor. Give it the length of a sequence you own and
//! the number of rows you can display; it tracks the selected element, moves
//! it by single steps or whole pages, and tells you which slice of your
//! sequence to show and where the selection sits inside that slice.
//!
//! Public API:
//! - `Pager` - Selection cursor with `next`/`prev`/`page_down`/`page_up`
//! - `PagerConfig` - Construction options (display style, pre-selection)
//! - `DisplayStyle` - Fixed pages, top-anchored or bottom-anchored windows
//! - `Window` - The range to display plus the relative selection
//! - `Motion` - Navigation steps for key-driven callers
//!
//! ## Usage
//!
//! ```rust
//! use libpager_core::{Pager, PagerConfig};
//!
//! let data = ["one", "two", "three", "four", "five", "six", "seven"];
//!
//! let config = PagerConfig::default().pre_select(3).top_anchored();
//! let mut pager = Pager::with_config(3, data.len(), config).unwrap();
//!
//! pager.page_down();
//! pager.prev();
//! pager.prev();
//!
//! let mut lines = Vec::new();
//! if let Some(window) = pager.window() {
//!     for (i, line) in window.slice(&data).iter().enumerate() {
//!         let prefix = if i == window.selected { "> " } else { "  " };
//!         lines.push(format!("{}{}", prefix, line));
//!     }
//! }
//!
//! assert_eq!(lines, ["> five", "  six", "  seven"]);
//! ```

pub mod config;
pub use config::PagerConfig;

pub mod error;
pub use error::{PagerError, Result};

pub mod pager;
pub use pager::{Motion, Pager};

pub mod style;
pub use style::DisplayStyle;

pub mod window;
pub use window::Window;
