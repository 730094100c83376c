//! Pagination helpers for the raw reading table.

use serde::{Serialize, Serializer};

/// Rows per page in reading tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page counts up to this size are listed in full, without ellipses.
pub const MAX_FLAT_PAGES: usize = 7;

/// One entry of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Placeholder for an elided run of page numbers.
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Page numbers to show for `current_page` out of `total_pages`.
///
/// Short lists are returned in full. Longer ones always show the first and
/// last page plus the pages adjacent to the current one, with an ellipsis
/// wherever that window leaves a gap. `current_page` must already be clamped
/// to `[1, total_pages]`.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageItem> {
    if total_pages <= MAX_FLAT_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let left = current_page.saturating_sub(1).max(2);
    let right = current_page.saturating_add(1).min(total_pages - 1);

    let mut items = Vec::with_capacity(MAX_FLAT_PAGES);
    items.push(PageItem::Page(1));
    if left > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((left..=right).map(PageItem::Page));
    if right < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

/// Number of pages needed for `total_items` rows. Zero rows need zero pages.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Clamp a requested page into `[1, total_pages]`; `1` when there are no
/// pages.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows on `page` (1-based). Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    // -- page_window ---------------------------------------------------------

    #[test]
    fn short_list_is_flat() {
        assert_eq!(page_window(5, 3), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn seven_pages_is_still_flat() {
        assert_eq!(page_window(7, 7).len(), 7);
        assert!(!page_window(7, 4).contains(&Ellipsis));
    }

    #[test]
    fn zero_pages_is_empty() {
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn middle_page_has_both_ellipses() {
        assert_eq!(
            page_window(20, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn first_page_has_no_leading_ellipsis() {
        assert_eq!(page_window(20, 1), vec![Page(1), Page(2), Ellipsis, Page(20)]);
    }

    #[test]
    fn last_page_has_no_trailing_ellipsis() {
        assert_eq!(page_window(20, 20), vec![Page(1), Ellipsis, Page(19), Page(20)]);
    }

    #[test]
    fn window_touching_edge_skips_ellipsis() {
        assert_eq!(
            page_window(8, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn long_lists_stay_bounded() {
        for current in 1..=50 {
            assert!(page_window(50, current).len() <= MAX_FLAT_PAGES);
        }
    }

    #[test]
    fn page_items_serialize_as_numbers_and_marker() {
        let json = serde_json::to_string(&page_window(20, 1)).unwrap();
        assert_eq!(json, r#"[1,2,"ellipsis",20]"#);
    }

    // -- page_count / clamp_page / page_slice --------------------------------

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn clamp_page_into_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn page_slice_returns_one_page() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&rows, 1, 10), &rows[0..10]);
        assert_eq!(page_slice(&rows, 3, 10), &[21u32, 22, 23, 24, 25][..]);
        assert!(page_slice(&rows, 4, 10).is_empty());
    }
}
