// Shared fixtures for the display style tests.
//
// Every table runs against the same ten-element sequence with a height of 3,
// so each style's behaviour on full pages and on the partial last page can be
// read side by side.

#![allow(dead_code)]

use libpager_core::{DisplayStyle, Pager, PagerConfig};

pub const DATA: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

pub const HEIGHT: usize = 3;

/// One row of a navigation table: after `times` calls, the window shows
/// `lines` with `selected` highlighted, and the last call returned `changed`.
pub struct Step {
    pub times: usize,
    pub lines: &'static [&'static str],
    pub selected: &'static str,
    pub changed: bool,
}

/// A page-up table row: `downs` page-downs followed by `ups` page-ups.
pub struct PageUpStep {
    pub downs: usize,
    pub ups: usize,
    pub lines: &'static [&'static str],
    pub selected: &'static str,
    pub changed: bool,
}

pub const fn step(
    times: usize,
    lines: &'static [&'static str],
    selected: &'static str,
    changed: bool,
) -> Step {
    Step { times, lines, selected, changed }
}

pub const fn page_up_step(
    downs: usize,
    ups: usize,
    lines: &'static [&'static str],
    selected: &'static str,
    changed: bool,
) -> PageUpStep {
    PageUpStep { downs, ups, lines, selected, changed }
}

pub fn new_pager(style: DisplayStyle) -> Pager {
    Pager::with_config(HEIGHT, DATA.len(), PagerConfig::default().style(style)).unwrap()
}

/// Slice `DATA` the way a caller would, returning the visible lines and the
/// highlighted one.
pub fn display(pager: &Pager) -> (Vec<&'static str>, Option<&'static str>) {
    let (from, to, selected) = pager.indexes();
    if from == -1 {
        return (Vec::new(), None);
    }

    let lines = DATA[from as usize..to as usize].to_vec();
    let selected_line = (selected != -1).then(|| DATA[(from + selected) as usize]);
    (lines, selected_line)
}

fn check(pager: &Pager, label: &str, lines: &[&str], selected: &str, changed: bool, got_changed: bool) {
    let (got_lines, got_selected) = display(pager);
    assert_eq!(got_selected, Some(selected), "{}: selected line", label);
    assert_eq!(got_lines, lines, "{}: lines", label);
    assert_eq!(got_changed, changed, "{}: changed", label);
}

pub fn run_next(style: DisplayStyle, table: &[Step]) {
    for step in table {
        let mut pager = new_pager(style);
        let mut changed = false;
        for _ in 0..step.times {
            changed = pager.next();
        }
        let label = format!("{:?}: {} times next()", style, step.times);
        check(&pager, &label, step.lines, step.selected, step.changed, changed);
    }
}

/// Walk to the end with 11 `next()` calls, then step back `times` times.
pub fn run_prev(style: DisplayStyle, table: &[Step]) {
    for step in table {
        let mut pager = new_pager(style);
        for _ in 0..11 {
            pager.next();
        }
        let mut changed = false;
        for _ in 0..step.times {
            changed = pager.prev();
        }
        let label = format!("{:?}: {} times prev()", style, step.times);
        check(&pager, &label, step.lines, step.selected, step.changed, changed);
    }
}

pub fn run_page_down(style: DisplayStyle, table: &[Step]) {
    for step in table {
        let mut pager = new_pager(style);
        let mut changed = false;
        for _ in 0..step.times {
            changed = pager.page_down();
        }
        let label = format!("{:?}: {} times page_down()", style, step.times);
        check(&pager, &label, step.lines, step.selected, step.changed, changed);
    }
}

pub fn run_page_up(style: DisplayStyle, table: &[PageUpStep]) {
    for step in table {
        let mut pager = new_pager(style);
        for _ in 0..step.downs {
            pager.page_down();
        }
        let mut changed = false;
        for _ in 0..step.ups {
            changed = pager.page_up();
        }
        let label = format!(
            "{:?}: {} times page_down(), {} times page_up()",
            style, step.downs, step.ups
        );
        check(&pager, &label, step.lines, step.selected, step.changed, changed);
    }
}
