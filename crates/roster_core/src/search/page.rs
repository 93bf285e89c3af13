//! Page slicing and navigation for matched results.
//!
//! # Invariants
//! - Page numbers are 1-indexed; zero page size/number is clamped to 1.
//! - Total pages is at least 1, even for an empty result set.
//! - Pages past the end are empty, not errors.

/// Returns the page count for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Returns the `page_number`-th slice of `matched`, clipped to its length.
pub fn paginate<T>(matched: &[T], page_size: usize, page_number: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= matched.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(matched.len());
    &matched[start..end]
}

/// Prev/next pagination controls state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    /// Current 1-indexed page.
    pub page: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
    /// Whether the matched set spans more than one page.
    visible: bool,
}

impl PageNav {
    /// Builds controls for `matched_len` items shown `page_size` at a time.
    pub fn new(matched_len: usize, page_size: usize, page: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page: page.max(1),
            total_pages: total_pages(matched_len, page_size),
            visible: matched_len > page_size,
        }
    }

    /// Controls are only shown when results overflow a single page.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Previous page number, saturating at 1.
    pub fn prev(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Next page number, saturating at the last page.
    pub fn next(&self) -> usize {
        self.page.saturating_add(1).min(self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, total_pages, PageNav};

    #[test]
    fn zero_inputs_are_clamped() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 0, 1), &[1]);
        assert_eq!(paginate(&items, 2, 0), &[1, 2]);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let items = [1, 2, 3];
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn nav_saturates_at_both_ends() {
        let nav = PageNav::new(13, 6, 1);
        assert!(nav.is_visible());
        assert!(!nav.has_prev());
        assert_eq!(nav.prev(), 1);
        assert_eq!(nav.next(), 2);

        let last = PageNav::new(13, 6, 3);
        assert!(!last.has_next());
        assert_eq!(last.next(), 3);

        let far = PageNav::new(13, 6, usize::MAX);
        assert!(!far.has_next());
        assert_eq!(far.next(), 3);
        assert_eq!(far.prev(), usize::MAX - 1);

        let single = PageNav::new(6, 6, 1);
        assert!(!single.is_visible());
        assert_eq!(single.total_pages, 1);
    }
}
