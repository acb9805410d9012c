//! Page arithmetic for the pagination bar.
//!
//! Pages are 1-based everywhere in this module. Out-of-range requests are
//! clamped instead of reported, so callers can forward raw key presses.

use std::ops::Range;

/// Page sizes offered by the "Items per page" selector.
pub const PAGE_SIZES: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page buttons rendered at once.
const WINDOW_LEN: usize = 3;

/// Everything the pagination bar needs to render one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Page the values were computed for, after clamping.
    pub current_page: usize,
    /// Number of pages; at least 1.
    pub total_pages: usize,
    /// Total number of items in the visible set.
    pub total_items: usize,
    /// Items per page used for the computation.
    pub items_per_page: usize,
    /// 1-based index of the first item on the page.
    pub start_item: usize,
    /// 1-based index of the last item on the page; `0` for an empty set.
    pub end_item: usize,
    /// Page numbers to render as buttons, ascending.
    pub page_window: Vec<usize>,
}

/// Navigation request coming from the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Jump to page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to a specific page (clamped).
    Goto(usize),
}

/// What: Compute the pagination bar state.
///
/// Inputs:
/// - `current_page`: Requested page (1-based; clamped into range)
/// - `total_items`: Size of the visible set
/// - `items_per_page`: Page size (`0` is treated as `1`)
///
/// Output:
/// - `PageInfo` with item range, page count and the page-number window
///
/// Details:
/// - An empty set yields one page, `start_item = 1` and `end_item = 0`.
pub fn compute(current_page: usize, total_items: usize, items_per_page: usize) -> PageInfo {
    let per_page = items_per_page.max(1);
    let total_pages = total_items.div_ceil(per_page).max(1);
    let current = clamp_page(current_page, total_pages);
    let start_item = (current - 1) * per_page + 1;
    let end_item = (current * per_page).min(total_items);
    PageInfo {
        current_page: current,
        total_pages,
        total_items,
        items_per_page: per_page,
        start_item,
        end_item,
        page_window: page_window(current, total_pages),
    }
}

/// What: Build the window of page buttons around the current page.
///
/// Inputs:
/// - `current`: Current page, already within `1..=total_pages`
/// - `total_pages`: Page count
///
/// Output:
/// - At most three ascending page numbers
fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= WINDOW_LEN {
        return (1..=total_pages).collect();
    }
    if current == 1 {
        return vec![1, 2, 3];
    }
    if current == total_pages {
        return vec![total_pages - 2, total_pages - 1, total_pages];
    }
    vec![current - 1, current, current + 1]
}

/// Clamp `page` into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// What: Resolve a navigation request into the new current page.
///
/// Inputs:
/// - `current`: Current page
/// - `total_pages`: Page count
/// - `nav`: Requested move
///
/// Output:
/// - New page, clamped; Previous/First on page 1 and Next/Last on the last page are no-ops
pub fn navigate(current: usize, total_pages: usize, nav: PageNav) -> usize {
    let current = clamp_page(current, total_pages);
    let target = match nav {
        PageNav::First => 1,
        PageNav::Previous => current.saturating_sub(1),
        PageNav::Next => current.saturating_add(1),
        PageNav::Last => total_pages,
        PageNav::Goto(p) => p,
    };
    clamp_page(target, total_pages)
}

/// Next larger allowed page size, or `current` when already at the top.
pub fn next_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|&s| s > current)
        .unwrap_or(current)
}

/// Next smaller allowed page size, or `current` when already at the bottom.
pub fn previous_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&s| s < current)
        .unwrap_or(current)
}

/// Whether `size` is one of [`PAGE_SIZES`].
pub fn is_allowed_page_size(size: usize) -> bool {
    PAGE_SIZES.contains(&size)
}

impl PageInfo {
    /// Zero-based half-open range of the visible set shown on this page.
    pub fn slice_range(&self) -> Range<usize> {
        if self.total_items == 0 {
            return 0..0;
        }
        (self.start_item - 1)..self.end_item
    }

    /// Whether First/Previous do anything.
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether Next/Last do anything.
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Showing X-Y of Z" label.
    pub fn label(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start_item, self.end_item, self.total_items
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Last partial page of a larger set
    ///
    /// - Input: 122 items, 10 per page, page 13
    /// - Output: 13 pages, items 121-122, window ends at 13
    fn last_partial_page() {
        let info = compute(13, 122, 10);
        assert_eq!(info.total_pages, 13);
        assert_eq!(info.start_item, 121);
        assert_eq!(info.end_item, 122);
        assert_eq!(info.page_window, vec![11, 12, 13]);
        assert_eq!(info.slice_range(), 120..122);
        assert_eq!(info.label(), "Showing 121-122 of 122");
    }

    #[test]
    /// What: Empty set edge case
    ///
    /// - Input: 0 items
    /// - Output: One page, start 1, end 0, window [1], empty slice
    fn empty_set() {
        let info = compute(1, 0, 10);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.start_item, 1);
        assert_eq!(info.end_item, 0);
        assert_eq!(info.page_window, vec![1]);
        assert!(info.slice_range().is_empty());
        assert!(!info.has_previous());
        assert!(!info.has_next());
    }

    #[test]
    /// What: Window shape at the edges and in the middle
    ///
    /// - Input: 20 pages; current 1, 20, 10; and a 2-page set
    /// - Output: [1,2,3], [18,19,20], [9,10,11], [1,2]
    fn window_shapes() {
        assert_eq!(compute(1, 200, 10).page_window, vec![1, 2, 3]);
        assert_eq!(compute(20, 200, 10).page_window, vec![18, 19, 20]);
        assert_eq!(compute(10, 200, 10).page_window, vec![9, 10, 11]);
        assert_eq!(compute(2, 15, 10).page_window, vec![1, 2]);
    }

    #[test]
    /// What: Out-of-range inputs are clamped
    ///
    /// - Input: Page 0, page beyond the end, zero page size
    /// - Output: Clamped to first/last page; page size treated as 1
    fn clamps_out_of_range() {
        assert_eq!(compute(0, 30, 10).current_page, 1);
        assert_eq!(compute(99, 30, 10).current_page, 3);
        let info = compute(2, 3, 0);
        assert_eq!(info.items_per_page, 1);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.start_item, 2);
    }

    #[test]
    /// What: Navigation no-ops at the bounds
    ///
    /// - Input: Previous/First on page 1, Next/Last on last page, Goto beyond end
    /// - Output: Page unchanged at bounds; Goto clamped
    fn navigation_bounds() {
        assert_eq!(navigate(1, 5, PageNav::Previous), 1);
        assert_eq!(navigate(1, 5, PageNav::First), 1);
        assert_eq!(navigate(5, 5, PageNav::Next), 5);
        assert_eq!(navigate(5, 5, PageNav::Last), 5);
        assert_eq!(navigate(2, 5, PageNav::Next), 3);
        assert_eq!(navigate(2, 5, PageNav::Goto(42)), 5);
        assert_eq!(navigate(2, 5, PageNav::Goto(0)), 1);
    }

    #[test]
    /// What: Page size stepping
    ///
    /// - Input: Sizes inside and at the ends of the allowed list
    /// - Output: Neighbouring sizes; ends stick
    fn page_size_stepping() {
        assert_eq!(next_page_size(10), 20);
        assert_eq!(next_page_size(20), 25);
        assert_eq!(next_page_size(100), 100);
        assert_eq!(previous_page_size(10), 5);
        assert_eq!(previous_page_size(5), 5);
        assert!(is_allowed_page_size(25));
        assert!(!is_allowed_page_size(15));
    }

    #[test]
    /// What: Bounds invariant over a grid of inputs
    ///
    /// - Input: Totals 0..60, every allowed size, every valid page
    /// - Output: start <= end + 1, end <= total, page length <= size
    fn bounds_invariant() {
        for total in 0..60 {
            for size in PAGE_SIZES {
                let pages = compute(1, total, size).total_pages;
                for page in 1..=pages {
                    let info = compute(page, total, size);
                    assert!(info.end_item <= total);
                    if total > 0 {
                        assert!(info.start_item <= info.end_item);
                        assert!(info.end_item - info.start_item < size);
                    }
                    assert!(info.page_window.len() <= 3);
                    assert!(info.page_window.contains(&page));
                }
            }
        }
    }
}
