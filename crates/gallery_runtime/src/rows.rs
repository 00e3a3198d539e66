//! Breakpoint-driven row grouping and virtual-scroll windowing for the icon grid.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: &'static str,
    /// Smallest viewport width (CSS px) this breakpoint applies to.
    pub min_width: u32,
    pub columns: usize,
}

/// Breakpoints in ascending `min_width` order.
pub const BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint {
        name: "xs",
        min_width: 0,
        columns: 3,
    },
    Breakpoint {
        name: "sm",
        min_width: 480,
        columns: 4,
    },
    Breakpoint {
        name: "md",
        min_width: 768,
        columns: 6,
    },
    Breakpoint {
        name: "lg",
        min_width: 1024,
        columns: 8,
    },
    Breakpoint {
        name: "xl",
        min_width: 1440,
        columns: 10,
    },
];

pub fn breakpoint_for_width(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| width >= bp.min_width)
        .copied()
        .unwrap_or(BREAKPOINTS[0])
}

pub fn columns_for_width(width: u32) -> usize {
    breakpoint_for_width(width).columns
}

/// Splits `items` into contiguous rows of `columns` entries; the last row may be shorter.
pub fn group_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items
        .chunks(columns.max(1))
        .map(<[T]>::to_vec)
        .collect()
}

/// Half-open range of rows to render for a scroll container, padded by `overscan` rows.
pub fn visible_row_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    total_rows: usize,
    overscan: usize,
) -> Range<usize> {
    if total_rows == 0 || row_height <= 0.0 {
        return 0..0;
    }
    let top = scroll_top.max(0.0);
    let first = (top / row_height).floor() as usize;
    let last = ((top + viewport_height.max(0.0)) / row_height).ceil() as usize;

    let end = last.saturating_add(overscan).min(total_rows);
    let start = first.saturating_sub(overscan).min(end);
    start..end
}
