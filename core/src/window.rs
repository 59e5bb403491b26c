//! The visible slice of a paged sequence.

use std::ops::Range;

/// A half-open window `[from, to)` over the caller's sequence, plus the
/// position of the selected element relative to `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First index shown (inclusive)
    pub from: usize,

    /// End of the window (exclusive)
    pub to: usize,

    /// Selected element, counted from `from`
    pub selected: usize,
}

impl Window {
    /// Index triple returned when there is nothing to show.
    pub const SENTINEL_INDEXES: (isize, isize, isize) = (-1, -1, -1);

    pub fn new(from: usize, to: usize, selected: usize) -> Self {
        debug_assert!(from <= to, "window start {} past its end {}", from, to);
        Self { from, to, selected }
    }

    /// Get the window as a range of indexes into the underlying sequence.
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }

    /// Index of the selected element in the underlying sequence.
    pub fn absolute_selected(&self) -> usize {
        self.from + self.selected
    }

    /// Slice the caller's sequence down to this window.
    ///
    /// The window is clipped to `items`, so a sequence shorter than the one
    /// the pager was built for yields a shorter (possibly empty) slice rather
    /// than a panic.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.to.min(items.len());
        let start = self.from.min(end);
        &items[start..end]
    }

    /// Get the selected element out of the caller's sequence.
    pub fn selected_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.slice(items).get(self.selected)
    }

    /// Convert to the signed `(from, to, selected)` triple.
    ///
    /// Indexes above `isize::MAX` have no signed form; those windows map to
    /// [`Window::SENTINEL_INDEXES`].
    pub fn as_indexes(&self) -> (isize, isize, isize) {
        match (
            isize::try_from(self.from),
            isize::try_from(self.to),
            isize::try_from(self.selected),
        ) {
            (Ok(from), Ok(to), Ok(selected)) => (from, to, selected),
            _ => Self::SENTINEL_INDEXES,
        }
    }
}
