//! Directory Query State
//!
//! Search term plus 1-indexed page over the filtered results. Pagination
//! is purely client-side; the invariant is that changing the term snaps
//! the page back to 1.

/// Records shown per page, as in the original client
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Search/pagination state for one directory view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    term: String,
    page: usize,
    page_size: usize,
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            term: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Update the search term; always resets the active page to 1
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages `result_count` results span, never less than 1
    /// (an empty result set still has one, empty, page)
    pub fn total_pages(&self, result_count: usize) -> usize {
        ((result_count + self.page_size - 1) / self.page_size).max(1)
    }

    /// Contiguous slice of `results` for the active page, clipped to bounds
    pub fn page_slice<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        let start = (self.page - 1)
            .saturating_mul(self.page_size)
            .min(results.len());
        let end = (start + self.page_size).min(results.len());
        &results[start..end]
    }
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self::new()
    }
}
