use serde::{Deserialize, Serialize};

/// One page of content together with the pagination metadata computed for it.
///
/// A `Page` is an immutable snapshot: every field is resolved by
/// [`PageBuilder`](crate::builder::PageBuilder) before construction and only
/// read access is exposed. The navigation windows hold one-based page numbers
/// suitable for rendering page-selector links around the current page.
///
/// # Example
/// ```
/// use paging_core_model::models::page::Page;
///
/// let page = Page::builder()
///     .content(vec![1, 2, 3])
///     .page_offset(0)
///     .page_size(3)
///     .total_elements(9)
///     .build()?;
///
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.is_first_page());
/// assert!(page.has_next_page());
/// assert_eq!(page.next_navigation(), &[2, 3]);
/// # Ok::<(), paging_core_api::error::PagingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub(crate) total_elements: u64,
    pub(crate) total_pages: usize,
    pub(crate) req_page_offset: usize,
    pub(crate) req_page_size: usize,
    pub(crate) req_paging_navigation_num: usize,
    pub(crate) cur_page_offset: usize,
    pub(crate) cur_page_size: usize,
    pub(crate) has_previous_page: bool,
    pub(crate) has_next_page: bool,
    pub(crate) is_first_page: bool,
    pub(crate) is_last_page: bool,
    pub(crate) previous_navigation: Vec<usize>,
    pub(crate) next_navigation: Vec<usize>,
    pub(crate) content: Vec<T>,
}

impl<T> Page<T> {
    /// Best-known number of elements across the whole result set
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages in the whole result set, always at least 1
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Effective requested page offset (zero-based)
    pub fn req_page_offset(&self) -> usize {
        self.req_page_offset
    }

    /// Effective requested page size
    pub fn req_page_size(&self) -> usize {
        self.req_page_size
    }

    /// Effective requested navigation width
    pub fn req_paging_navigation_num(&self) -> usize {
        self.req_paging_navigation_num
    }

    /// Offset of the current page (zero-based), equal to the requested offset
    pub fn cur_page_offset(&self) -> usize {
        self.cur_page_offset
    }

    /// Number of items actually on this page, possibly fewer than
    /// [`req_page_size`](Self::req_page_size) on the last page
    pub fn cur_page_size(&self) -> usize {
        self.cur_page_size
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn is_first_page(&self) -> bool {
        self.is_first_page
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    /// One-based page numbers immediately before the current page, ascending
    pub fn previous_navigation(&self) -> &[usize] {
        &self.previous_navigation
    }

    /// One-based page numbers immediately after the current page, ascending
    pub fn next_navigation(&self) -> &[usize] {
        &self.next_navigation
    }

    /// Items on this page
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Release ownership of the items on this page
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Map the content into another type, keeping every metadata field
    ///
    /// # Example
    /// ```
    /// use paging_core_model::models::page::Page;
    ///
    /// let page = Page::builder().content(vec![1, 2, 3]).build()?;
    /// let labels = page.map(|n| format!("item-{n}"));
    ///
    /// assert_eq!(labels.content(), &["item-1", "item-2", "item-3"]);
    /// # Ok::<(), paging_core_api::error::PagingError>(())
    /// ```
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            req_page_offset: self.req_page_offset,
            req_page_size: self.req_page_size,
            req_paging_navigation_num: self.req_paging_navigation_num,
            cur_page_offset: self.cur_page_offset,
            cur_page_size: self.cur_page_size,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            is_first_page: self.is_first_page,
            is_last_page: self.is_last_page,
            previous_navigation: self.previous_navigation,
            next_navigation: self.next_navigation,
            content: self.content.into_iter().map(f).collect(),
        }
    }
}
