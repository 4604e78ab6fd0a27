//! Pagination math
//!
//! Pure computation over a result count and a requested page: total pages,
//! clamping, and the sliding window of numbered links. Writing the outcome to
//! the URL and the document is the controllers' and renderers' business.

/// Number of pages needed for `total` results at `per_page`. Never 0: an
/// empty result set still has one (empty) page.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page).max(1)
}

/// The numbered-link strip for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    /// Consecutive page numbers shown in the window, at most the configured
    /// width, clamped to `[1, total]`.
    pub numbers: Vec<usize>,
    /// Whether a link to page 1 precedes the window.
    pub leading_first: bool,
    /// Whether a gap marker sits between page 1 and the window start.
    pub leading_gap: bool,
    /// Whether a gap marker sits between the window end and the last page.
    pub trailing_gap: bool,
    /// Whether a link to the last page follows the window.
    pub trailing_last: bool,
}

impl PageWindow {
    /// Build a window of up to `width` numbered links centered on `current`.
    ///
    /// `current` must already be clamped to `[1, total]`.
    pub fn build(current: usize, total: usize, width: usize) -> Self {
        let width = width.max(1);
        let half = width / 2;

        let start = current.saturating_sub(half).max(1);
        let end = (start + width - 1).min(total);
        let start = end.saturating_sub(width - 1).max(1);

        Self {
            current,
            total,
            numbers: (start..=end).collect(),
            leading_first: start > 1,
            leading_gap: start > 2,
            trailing_gap: end + 1 < total,
            trailing_last: end < total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 1);
    }

    #[test]
    fn test_centered_window() {
        let window = PageWindow::build(5, 10, 7);
        assert_eq!(window.numbers, vec![2, 3, 4, 5, 6, 7, 8]);
        assert!(window.leading_first);
        assert!(!window.leading_gap); // window starts right after page 1
        assert!(window.trailing_gap);
        assert!(window.trailing_last);
    }

    #[test]
    fn test_window_at_start() {
        let window = PageWindow::build(1, 10, 7);
        assert_eq!(window.numbers, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!window.leading_first);
        assert!(!window.leading_gap);
        assert!(window.trailing_gap);
        assert!(window.trailing_last);
        assert!(!window.has_prev());
        assert!(window.has_next());
    }

    #[test]
    fn test_window_at_end() {
        let window = PageWindow::build(10, 10, 7);
        assert_eq!(window.numbers, vec![4, 5, 6, 7, 8, 9, 10]);
        assert!(window.leading_first);
        assert!(window.leading_gap);
        assert!(!window.trailing_gap);
        assert!(!window.trailing_last);
        assert!(window.has_prev());
        assert!(!window.has_next());
    }

    #[test]
    fn test_window_deep_gap() {
        let window = PageWindow::build(6, 20, 7);
        assert_eq!(window.numbers, vec![3, 4, 5, 6, 7, 8, 9]);
        assert!(window.leading_first);
        assert!(window.leading_gap);
        assert!(window.trailing_gap);
        assert!(window.trailing_last);
    }

    #[test]
    fn test_fewer_pages_than_width() {
        let window = PageWindow::build(2, 3, 7);
        assert_eq!(window.numbers, vec![1, 2, 3]);
        assert!(!window.leading_first);
        assert!(!window.trailing_last);
    }

    #[test]
    fn test_single_page() {
        let window = PageWindow::build(1, 1, 7);
        assert_eq!(window.numbers, vec![1]);
        assert!(!window.has_prev());
        assert!(!window.has_next());
    }
}
