/// Rows shown per page
pub const PAGE_SIZE: usize = 10;

/// One-based page cursor over a filtered row list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(len: usize) -> usize {
        len.div_ceil(PAGE_SIZE)
    }

    /// Half-open `(start, end)` of the current page; `end` may run past `len`
    pub fn bounds(&self) -> (usize, usize) {
        let start = self.current_page.saturating_sub(1) * PAGE_SIZE;
        (start, start + PAGE_SIZE)
    }

    pub fn slice<'s, T>(&self, rows: &'s [T]) -> &'s [T] {
        let (start, end) = self.bounds();
        let start = start.min(rows.len());
        let end = end.min(rows.len());
        &rows[start..end]
    }

    /// Back to the first page; called when sort column, direction or query change
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump to page 1 when the current page no longer exists.
    ///
    /// An empty result (zero pages) leaves the cursor alone.
    pub fn clamp(&mut self, len: usize) {
        let total = Self::total_pages(len);
        if total > 0 && self.current_page > total {
            self.current_page = 1;
        }
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, len: usize) {
        let total = Self::total_pages(len).max(1);
        self.current_page = (self.current_page + 1).min(total);
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        let total = Self::total_pages(len).max(1);
        self.current_page = page.clamp(1, total);
    }

    /// Controls are only shown when there is something to page through
    pub fn is_visible(len: usize) -> bool {
        Self::total_pages(len) > 1
    }

    /// "Showing 11-20 of 25"
    pub fn summary(&self, len: usize) -> String {
        let (start, end) = self.bounds();
        format!("Showing {}-{} of {}", start + 1, end.min(len), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_twenty_five_records() {
        let rows = numbers(25);
        let mut pagination = Pagination::new();

        assert_eq!(Pagination::total_pages(rows.len()), 3);
        assert_eq!(pagination.slice(&rows), &numbers(10)[..]);

        pagination.go_to(3, rows.len());
        assert_eq!(pagination.slice(&rows), &[21, 22, 23, 24, 25]);
        assert_eq!(pagination.summary(rows.len()), "Showing 21-25 of 25");
    }

    #[test]
    fn test_total_pages_edges() {
        assert_eq!(Pagination::total_pages(0), 0);
        assert_eq!(Pagination::total_pages(1), 1);
        assert_eq!(Pagination::total_pages(10), 1);
        assert_eq!(Pagination::total_pages(11), 2);
        assert!(!Pagination::is_visible(10));
        assert!(Pagination::is_visible(11));
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut pagination = Pagination::new();
        pagination.previous();
        assert_eq!(pagination.current_page(), 1);

        pagination.next(15);
        pagination.next(15);
        assert_eq!(pagination.current_page(), 2);

        pagination.go_to(9, 15);
        assert_eq!(pagination.current_page(), 2);
        pagination.go_to(0, 15);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pagination = Pagination::new();
        pagination.go_to(3, 25);

        pagination.clamp(0);
        assert_eq!(pagination.current_page(), 3);

        pagination.clamp(12);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let rows = numbers(5);
        let mut pagination = Pagination::new();
        pagination.go_to(2, 25);
        assert!(pagination.slice(&rows).is_empty());
    }

    #[test]
    fn test_zero_page_reads_as_first() {
        let pagination = Pagination { current_page: 0 };
        assert_eq!(pagination.bounds(), (0, PAGE_SIZE));
        assert_eq!(pagination.slice(&numbers(3)), &[1, 2, 3]);
    }
}
