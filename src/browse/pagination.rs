//! Pagination state and the windowed page-number computation.
//!
//! [`PaginationState`] mirrors the server's pagination metadata; totals are
//! adopted from the server after every successful fetch and never
//! recomputed locally. The display derivations ([`page_window`],
//! [`showing_range`]) are pure functions, recomputed from current state on
//! read, so they stay independently testable from the fetch controller.

use crate::models::PaginationMeta;

/// Page sizes the UI offers; the server caps `per_page` at 50.
pub const PAGE_SIZES: [u64; 3] = [10, 20, 50];

/// Default page size, matching the server's.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// How many neighbors to show on each side of the current page.
pub const PAGE_WINDOW: u64 = 2;

/// One entry in the rendered page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A clickable page number
    Page(u64),
    /// A display-only gap marker, never actionable
    Ellipsis,
}

/// Client-side pagination state.
///
/// `page` and `per_page` are what the client last requested until a fetch
/// succeeds, at which point the whole struct is replaced from the server's
/// metadata (the server may have clamped an out-of-range page).
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        }
    }
}

impl PaginationState {
    /// Adopt the server's metadata wholesale.
    pub fn apply(&mut self, meta: &PaginationMeta) {
        self.page = meta.page;
        self.per_page = meta.per_page;
        self.total_items = meta.total_items;
        self.total_pages = meta.total_pages;
        self.has_next = meta.has_next;
        self.has_previous = meta.has_previous;
    }

    /// Server flag re-checked against the page/total invariant.
    pub fn can_go_next(&self) -> bool {
        self.has_next && self.page < self.total_pages
    }

    /// Server flag re-checked against the page > 1 invariant.
    pub fn can_go_previous(&self) -> bool {
        self.has_previous && self.page > 1
    }

    /// The windowed page bar for the current state.
    pub fn window(&self) -> Vec<PageEntry> {
        page_window(self.page, self.total_pages, PAGE_WINDOW)
    }

    /// 1-based inclusive range of items on the current page, `(0, 0)` when
    /// the collection is empty.
    pub fn showing_range(&self) -> (u64, u64) {
        showing_range(self.page, self.per_page, self.total_items)
    }

    /// Whether `size` is one of the offered page sizes.
    pub fn is_valid_page_size(size: u64) -> bool {
        PAGE_SIZES.contains(&size)
    }

    /// The page size after the current one, wrapping around the fixed set.
    pub fn next_page_size(&self) -> u64 {
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == self.per_page)
            .unwrap_or(0);
        PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()]
    }
}

/// Compute the windowed page list: first, last, a `window`-wide
/// neighborhood around `current`, and ellipsis markers for the gaps.
///
/// Collections of seven or fewer pages are listed in full. The result
/// never contains duplicate page numbers and its numeric entries are
/// strictly increasing.
pub fn page_window(current: u64, total: u64, window: u64) -> Vec<PageEntry> {
    if total <= 7 {
        return (1..=total).map(PageEntry::Page).collect();
    }

    let mut entries = vec![PageEntry::Page(1)];

    if current > window + 2 {
        entries.push(PageEntry::Ellipsis);
    }

    let low = current.saturating_sub(window).max(2);
    let high = (current + window).min(total - 1);
    for page in low..=high {
        entries.push(PageEntry::Page(page));
    }

    if current + window + 1 < total {
        entries.push(PageEntry::Ellipsis);
    }

    entries.push(PageEntry::Page(total));
    entries
}

/// 1-based inclusive showing range for "Showing X-Y of Z".
pub fn showing_range(page: u64, per_page: u64, total_items: u64) -> (u64, u64) {
    if total_items == 0 {
        return (0, 0);
    }
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total_items);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(entries: &[PageEntry]) -> Vec<u64> {
        entries
            .iter()
            .filter_map(|e| match e {
                PageEntry::Page(n) => Some(*n),
                PageEntry::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_small_totals_listed_in_full() {
        for total in 1..=7 {
            for current in 1..=total {
                let window = page_window(current, total, PAGE_WINDOW);
                let expected: Vec<PageEntry> = (1..=total).map(PageEntry::Page).collect();
                assert_eq!(window, expected, "current={} total={}", current, total);
            }
        }
    }

    #[test]
    fn test_window_mid_range_has_both_gaps() {
        let window = page_window(5, 10, 2);
        assert_eq!(
            window,
            vec![
                PageEntry::Page(1),
                PageEntry::Ellipsis,
                PageEntry::Page(3),
                PageEntry::Page(4),
                PageEntry::Page(5),
                PageEntry::Page(6),
                PageEntry::Page(7),
                PageEntry::Ellipsis,
                PageEntry::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_at_first_page_has_no_leading_gap() {
        let window = page_window(1, 10, 2);
        assert_eq!(
            window,
            vec![
                PageEntry::Page(1),
                PageEntry::Page(2),
                PageEntry::Page(3),
                PageEntry::Ellipsis,
                PageEntry::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_at_last_page_has_no_trailing_gap() {
        let window = page_window(10, 10, 2);
        assert_eq!(
            window,
            vec![
                PageEntry::Page(1),
                PageEntry::Ellipsis,
                PageEntry::Page(8),
                PageEntry::Page(9),
                PageEntry::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_numbers_strictly_increasing_no_duplicates() {
        for total in 8..40 {
            for current in 1..=total {
                let numbers = pages(&page_window(current, total, PAGE_WINDOW));
                for pair in numbers.windows(2) {
                    assert!(pair[0] < pair[1], "current={} total={}", current, total);
                }
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
            }
        }
    }

    #[test]
    fn test_showing_range_empty_collection() {
        assert_eq!(showing_range(1, 20, 0), (0, 0));
    }

    #[test]
    fn test_showing_range_mid_page() {
        assert_eq!(showing_range(3, 20, 95), (41, 60));
    }

    #[test]
    fn test_showing_range_clamps_final_page() {
        assert_eq!(showing_range(5, 20, 95), (81, 95));
    }

    #[test]
    fn test_apply_adopts_server_metadata() {
        let mut state = PaginationState::default();
        state.apply(&PaginationMeta {
            page: 5,
            per_page: 20,
            total_items: 95,
            total_pages: 5,
            has_next: false,
            has_previous: true,
        });
        assert_eq!(state.page, 5);
        assert_eq!(state.total_pages, 5);
        assert!(!state.can_go_next());
        assert!(state.can_go_previous());
    }

    #[test]
    fn test_gating_on_first_page() {
        let mut state = PaginationState::default();
        state.apply(&PaginationMeta {
            page: 1,
            per_page: 20,
            total_items: 95,
            total_pages: 5,
            has_next: true,
            has_previous: false,
        });
        assert!(state.can_go_next());
        assert!(!state.can_go_previous());
    }

    #[test]
    fn test_gating_rechecks_inconsistent_flags() {
        // A server bug claiming has_next on the last page must not enable
        // the next control.
        let mut state = PaginationState::default();
        state.apply(&PaginationMeta {
            page: 5,
            per_page: 20,
            total_items: 95,
            total_pages: 5,
            has_next: true,
            has_previous: true,
        });
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_next_page_size_cycles_fixed_set() {
        let mut state = PaginationState::default();
        assert_eq!(state.per_page, 20);
        assert_eq!(state.next_page_size(), 50);
        state.per_page = 50;
        assert_eq!(state.next_page_size(), 10);
    }

    #[test]
    fn test_page_size_membership() {
        assert!(PaginationState::is_valid_page_size(10));
        assert!(PaginationState::is_valid_page_size(20));
        assert!(PaginationState::is_valid_page_size(50));
        assert!(!PaginationState::is_valid_page_size(25));
        assert!(!PaginationState::is_valid_page_size(0));
    }
}
