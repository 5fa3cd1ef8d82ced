use paging_core_api::domain::PageRequest;
use paging_core_api::error::PagingResult;

use crate::models::page::Page;

/// Paginate an already-fetched collection in memory.
///
/// For callers whose store cannot page at query time: the full collection is
/// sliced to the requested window and the slice is handed to the builder with
/// the collection length as the total. Items are moved, never cloned. A page
/// size of 0 keeps everything on a single page; a window past the end of the
/// collection yields an empty page with intact totals.
///
/// # Example
/// ```
/// use paging_core_api::domain::PageRequest;
/// use paging_core_model::paginate::paginate;
///
/// let items: Vec<u32> = (0..23).collect();
/// let page = paginate(items, PageRequest::new(2, 10))?;
///
/// assert_eq!(page.content(), &[20, 21, 22]);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.is_last_page());
/// # Ok::<(), paging_core_api::error::PagingError>(())
/// ```
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PagingResult<Page<T>> {
    let total_elements = items.len() as u64;

    let content: Vec<T> = if request.page_size == 0 {
        items
    } else {
        items
            .into_iter()
            .skip(request.element_offset())
            .take(request.page_size)
            .collect()
    };

    Page::builder()
        .page_request(request)
        .total_elements(total_elements)
        .content(content)
        .build()
}
