use serde::{Deserialize, Serialize};

/// Number of navigation page links exposed on each side of the current page
/// when a request does not specify its own width.
pub const DEFAULT_NAVIGATION_NUM: usize = 10;

/// Pagination request parameters for offset-based pagination
///
/// # Example
/// ```
/// use paging_core_api::domain::PageRequest;
///
/// let page_request = PageRequest::new(0, 20); // First page with 20 items
/// let next_page = page_request.next(); // Second page
/// assert_eq!(next_page.page_offset, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index; the one-based page number is `page_offset + 1`
    pub page_offset: usize,
    /// Requested number of items per page, 0 meaning "unspecified/no paging"
    pub page_size: usize,
    /// Number of navigation page links to expose on each side of the current page
    pub paging_navigation_num: usize,
}

impl PageRequest {
    /// Create a new page request with the default navigation width
    ///
    /// # Arguments
    /// * `page_offset` - Zero-based page index
    /// * `page_size` - Number of items per page
    pub fn new(page_offset: usize, page_size: usize) -> Self {
        Self {
            page_offset,
            page_size,
            paging_navigation_num: DEFAULT_NAVIGATION_NUM,
        }
    }

    /// Create a new page request with an explicit navigation width
    pub fn with_navigation_num(
        page_offset: usize,
        page_size: usize,
        paging_navigation_num: usize,
    ) -> Self {
        Self {
            page_offset,
            page_size,
            paging_navigation_num,
        }
    }

    /// Create a request for the first page
    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Arguments
    /// * `page_number` - Page number (1-based, will be converted to a 0-based offset)
    /// * `page_size` - Number of items per page
    ///
    /// # Example
    /// ```
    /// use paging_core_api::domain::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(1, 20); // page_offset: 0
    /// let page_2 = PageRequest::for_page(2, 20); // page_offset: 1
    /// assert_eq!(page_2.page_offset, 1);
    /// ```
    pub fn for_page(page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1); // Ensure page_number is at least 1
        Self::new(page_number - 1, page_size)
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        self.page_offset + 1
    }

    /// Get the number of elements that logically precede this page,
    /// i.e. what an offset/limit query would bind as its offset
    pub fn element_offset(&self) -> usize {
        self.page_offset * self.page_size
    }

    /// Get the request for the page after this one
    pub fn next(&self) -> Self {
        Self {
            page_offset: self.page_offset + 1,
            ..*self
        }
    }

    /// Get the request for the page before this one, saturating at the first page
    pub fn previous(&self) -> Self {
        Self {
            page_offset: self.page_offset.saturating_sub(1),
            ..*self
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_offset: 0,
            page_size: 20,
            paging_navigation_num: DEFAULT_NAVIGATION_NUM,
        }
    }
}
