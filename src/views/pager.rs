/// Items per page requested from every paginated endpoint.
pub const PAGE_SIZE: u32 = 8;

/// Zero-indexed page cursor. Bounds are checked before any fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            page_size: PAGE_SIZE,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Page to fetch for "next", or `None` when already on the last page.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Page to fetch for "previous", or `None` when on the first page.
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    /// Adopt the position reported by the server.
    pub fn update(&mut self, current_page: u32, total_pages: u32) {
        self.current_page = current_page;
        self.total_pages = total_pages;
    }

    /// "Page 2 of 5" (one-based for display; at least one page).
    pub fn label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page + 1,
            self.total_pages.max(self.current_page + 1)
        )
    }
}
