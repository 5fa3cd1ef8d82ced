use paging_core_api::domain::{PageRequest, DEFAULT_NAVIGATION_NUM};
use paging_core_api::error::{PagingError, PagingResult};

use crate::models::page::Page;

impl<T> Page<T> {
    /// Start assembling a page
    pub fn builder() -> PageBuilder<T> {
        PageBuilder::new()
    }
}

/// Single-use accumulator that normalizes raw pagination inputs and produces
/// an immutable [`Page`].
///
/// Parameters come either from the explicit setters or from a single
/// [`PageRequest`]; a supplied request always overrides the explicit
/// offset/size/navigation values. The builder is consumed by
/// [`build`](Self::build), so it cannot be reused.
///
/// The requested offset is not clamped against the computed page count: a
/// request beyond the last page keeps its offset and reads as a last page
/// with empty content.
///
/// # Example
/// ```
/// use paging_core_model::builder::PageBuilder;
///
/// let page = PageBuilder::new()
///     .content(vec!["a", "b"])
///     .page_offset(1)
///     .page_size(2)
///     .total_elements(4)
///     .build()?;
///
/// assert_eq!(page.total_pages(), 2);
/// assert!(page.is_last_page());
/// assert_eq!(page.previous_navigation(), &[1]);
/// # Ok::<(), paging_core_api::error::PagingError>(())
/// ```
pub struct PageBuilder<T> {
    total_elements: u64,
    page_request: Option<PageRequest>,
    req_page_offset: usize,
    req_page_size: usize,
    req_paging_navigation_num: usize,
    content: Option<Vec<T>>,
}

impl<T> PageBuilder<T> {
    pub fn new() -> Self {
        Self {
            total_elements: 0,
            page_request: None,
            req_page_offset: 0,
            req_page_size: 0,
            req_paging_navigation_num: DEFAULT_NAVIGATION_NUM,
            content: None,
        }
    }

    /// Set the items of the current page; required
    pub fn content(mut self, content: Vec<T>) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the requested page offset (zero-based)
    pub fn page_offset(mut self, page_offset: usize) -> Self {
        self.req_page_offset = page_offset;
        self
    }

    /// Set the requested page size; 0 means "one page containing everything supplied"
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.req_page_size = page_size;
        self
    }

    /// Set the navigation width, the maximum number of page links on each
    /// side of the current page
    pub fn paging_navigation_num(mut self, paging_navigation_num: usize) -> Self {
        self.req_paging_navigation_num = paging_navigation_num;
        self
    }

    /// Set all pagination parameters from a request object.
    ///
    /// A request supplied here takes precedence over any values set through
    /// [`page_offset`](Self::page_offset), [`page_size`](Self::page_size) and
    /// [`paging_navigation_num`](Self::paging_navigation_num).
    pub fn page_request(mut self, page_request: PageRequest) -> Self {
        self.page_request = Some(page_request);
        self
    }

    /// Set the caller's best estimate of the total element count.
    ///
    /// Left at 0, the total is initialized from the content length. A total
    /// smaller than what the page's position implies is corrected upward at
    /// build time.
    pub fn total_elements(mut self, total_elements: u64) -> Self {
        self.total_elements = total_elements;
        self
    }

    /// Normalize the collected inputs and produce the immutable [`Page`].
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The page with all derived metadata
    /// * `Err(PagingError::MissingArgument)` - If no content was supplied
    pub fn build(self) -> PagingResult<Page<T>> {
        let content = self
            .content
            .ok_or(PagingError::MissingArgument("content"))?;
        let content_size = content.len();

        let mut total_elements = self.total_elements;
        if total_elements == 0 {
            total_elements = content_size as u64;
        }

        // A request object wins over the explicit setters; the explicit path
        // treats an unset page size as "one page containing everything".
        let (req_page_offset, req_page_size, req_paging_navigation_num) = match self.page_request {
            Some(request) => (
                request.page_offset,
                request.page_size,
                request.paging_navigation_num,
            ),
            None => {
                let page_size = if self.req_page_size == 0 {
                    content_size
                } else {
                    self.req_page_size
                };
                (self.req_page_offset, page_size, self.req_paging_navigation_num)
            }
        };

        let cur_page_offset = req_page_offset;
        let cur_page_size = content_size;

        // Elements logically preceding this page. A stated total smaller than
        // what this page's position implies is corrected upward from the
        // content length. An empty page never grows the total.
        let previous_pages_total = req_page_offset as u64 * req_page_size as u64;
        if content_size != 0 && previous_pages_total + req_page_size as u64 > total_elements {
            total_elements = previous_pages_total + content_size as u64;
        }

        // A page size of 0 survives normalization only alongside empty
        // content; that combination is a single empty page.
        let total_pages = if req_page_size == 0 {
            1
        } else {
            (total_elements.div_ceil(req_page_size as u64) as usize).max(1)
        };

        let has_previous_page = cur_page_offset > 0;
        let is_first_page = !has_previous_page;
        let has_next_page = cur_page_offset + 1 < total_pages;
        let is_last_page = !has_next_page;

        let cur_page_num = cur_page_offset + 1;

        let previous_navigation: Vec<usize> = if has_previous_page {
            let window = req_paging_navigation_num.min(cur_page_num - 1);
            (cur_page_num - window..cur_page_num).collect()
        } else {
            Vec::new()
        };

        let next_navigation: Vec<usize> = if has_next_page {
            let window = req_paging_navigation_num.min(total_pages - cur_page_offset - 1);
            (cur_page_num + 1..=cur_page_num + window).collect()
        } else {
            Vec::new()
        };

        tracing::debug!(
            total_elements,
            total_pages,
            cur_page_offset,
            cur_page_size,
            "assembled pagination metadata"
        );

        Ok(Page {
            total_elements,
            total_pages,
            req_page_offset,
            req_page_size,
            req_paging_navigation_num,
            cur_page_offset,
            cur_page_size,
            has_previous_page,
            has_next_page,
            is_first_page,
            is_last_page,
            previous_navigation,
            next_navigation,
            content,
        })
    }
}

impl<T> Default for PageBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(len: usize) -> Vec<u32> {
        (0..len as u32).collect()
    }

    #[test]
    fn test_middle_page_with_full_windows_on_both_sides() {
        let page = Page::builder()
            .content(items(10))
            .page_offset(4)
            .page_size(10)
            .paging_navigation_num(10)
            .total_elements(95)
            .build()
            .unwrap();

        assert_eq!(page.total_elements(), 95);
        assert_eq!(page.total_pages(), 10);
        assert_eq!(page.cur_page_offset(), 4);
        assert_eq!(page.cur_page_size(), 10);
        assert!(page.has_previous_page());
        assert!(page.has_next_page());
        assert_eq!(page.previous_navigation(), &[1, 2, 3, 4]);
        assert_eq!(page.next_navigation(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_first_page_has_no_previous_navigation() {
        let page = Page::builder()
            .content(items(10))
            .page_offset(0)
            .page_size(10)
            .paging_navigation_num(10)
            .total_elements(95)
            .build()
            .unwrap();

        assert!(!page.has_previous_page());
        assert!(page.is_first_page());
        assert!(page.previous_navigation().is_empty());
        assert_eq!(page.next_navigation(), &[2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_navigation_window_is_bounded_by_navigation_num() {
        // Page 15 of 20 with a width of 10: previous window holds pages 5-14,
        // next window holds pages 16-20.
        let page = Page::builder()
            .content(items(10))
            .page_offset(14)
            .page_size(10)
            .paging_navigation_num(10)
            .total_elements(200)
            .build()
            .unwrap();

        assert_eq!(page.total_pages(), 20);
        assert_eq!(
            page.previous_navigation(),
            &[5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
        assert_eq!(page.next_navigation(), &[16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_unset_size_and_total_default_from_content() {
        let page = Page::builder().content(items(7)).build().unwrap();

        assert_eq!(page.total_elements(), 7);
        assert_eq!(page.req_page_size(), 7);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_next_page());
        assert!(page.previous_navigation().is_empty());
        assert!(page.next_navigation().is_empty());
    }

    #[test]
    fn test_under_reported_total_is_corrected_upward() {
        let page = Page::builder()
            .content(items(3))
            .page_offset(9)
            .page_size(10)
            .total_elements(50)
            .build()
            .unwrap();

        // 9 full pages of 10 precede this one, so 50 cannot be right.
        assert_eq!(page.total_elements(), 93);
        assert_eq!(page.total_pages(), 10);
        assert!(page.is_last_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_empty_content_without_parameters_is_a_single_empty_page() {
        let page = Page::builder().content(items(0)).build().unwrap();

        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.req_page_size(), 0);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.cur_page_size(), 0);
        assert!(page.is_first_page());
        assert!(page.is_last_page());
    }

    #[test]
    fn test_empty_content_with_explicit_size_keeps_one_page_floor() {
        let page = Page::builder()
            .content(items(0))
            .page_size(10)
            .build()
            .unwrap();

        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.total_pages(), 1);
        assert!(page.is_last_page());
    }

    #[test]
    fn test_empty_content_never_grows_the_total() {
        let page = Page::builder()
            .content(items(0))
            .page_offset(9)
            .page_size(10)
            .total_elements(50)
            .build()
            .unwrap();

        assert_eq!(page.total_elements(), 50);
        assert_eq!(page.total_pages(), 5);
    }

    #[test]
    fn test_missing_content_is_an_error() {
        let result = PageBuilder::<u32>::new().build();

        assert!(matches!(
            result,
            Err(PagingError::MissingArgument("content"))
        ));
    }

    #[test]
    fn test_page_request_overrides_explicit_parameters() {
        let request = PageRequest::with_navigation_num(1, 10, 3);

        let page = Page::builder()
            .content(items(10))
            .page_offset(9)
            .page_size(9)
            .paging_navigation_num(9)
            .page_request(request)
            .total_elements(40)
            .build()
            .unwrap();

        assert_eq!(page.req_page_offset(), 1);
        assert_eq!(page.req_page_size(), 10);
        assert_eq!(page.req_paging_navigation_num(), 3);
        assert_eq!(page.total_pages(), 4);
        assert_eq!(page.previous_navigation(), &[1]);
        assert_eq!(page.next_navigation(), &[3, 4]);
    }

    #[test]
    fn test_request_path_does_not_default_zero_page_size() {
        let page = Page::builder()
            .content(items(5))
            .page_request(PageRequest::new(0, 0))
            .build()
            .unwrap();

        assert_eq!(page.req_page_size(), 0);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_boundary_flags_across_all_pages() {
        for offset in 0..5 {
            let page = Page::builder()
                .content(items(10))
                .page_offset(offset)
                .page_size(10)
                .total_elements(50)
                .build()
                .unwrap();

            assert_eq!(page.total_pages(), 5);
            assert_eq!(page.has_previous_page(), offset > 0);
            assert_eq!(page.is_first_page(), offset == 0);
            assert_eq!(page.has_next_page(), offset + 1 < 5);
            assert_eq!(page.is_last_page(), offset + 1 == 5);
        }
    }

    #[test]
    fn test_navigation_invariants_across_widths() {
        for offset in 0..12 {
            for navigation_num in 0..6 {
                let page = Page::builder()
                    .content(items(10))
                    .page_offset(offset)
                    .page_size(10)
                    .paging_navigation_num(navigation_num)
                    .total_elements(120)
                    .build()
                    .unwrap();

                let previous = page.previous_navigation();
                let next = page.next_navigation();

                assert!(previous.len() <= navigation_num);
                assert!(next.len() <= navigation_num);
                if let Some(&last) = previous.last() {
                    assert_eq!(last, offset);
                }
                if let Some(&first) = next.first() {
                    assert_eq!(first, offset + 2);
                }
                assert!(previous.windows(2).all(|w| w[0] + 1 == w[1]));
                assert!(next.windows(2).all(|w| w[0] + 1 == w[1]));
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let build = || {
            Page::builder()
                .content(items(10))
                .page_offset(4)
                .page_size(10)
                .total_elements(95)
                .build()
                .unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_offset_beyond_total_reads_as_last_page() {
        // The offset is not clamped: flags and windows are derived from it
        // as-is, so a request past the end looks like a last page.
        let page = Page::builder()
            .content(items(0))
            .page_offset(7)
            .page_size(10)
            .total_elements(30)
            .build()
            .unwrap();

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.cur_page_offset(), 7);
        assert!(!page.has_next_page());
        assert!(page.is_last_page());
        assert!(page.next_navigation().is_empty());
        assert_eq!(page.previous_navigation(), &[1, 2, 3, 4, 5, 6, 7]);
    }
}
