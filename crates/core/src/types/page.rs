//! Pagination types shared between the store and transport layers.
//!
//! A [`PageRequest`] describes which slice of a listing a caller wants and a
//! [`Page`] carries one slice together with its metadata. Both are plain
//! values with no knowledge of the underlying storage.

use serde::{Deserialize, Serialize};

/// Default number of elements per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on elements per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A request for one page of a listing.
///
/// Pages are zero-based. Sizes are clamped to `1..=MAX_PAGE_SIZE` at
/// construction, so an in-range request can always be built from untrusted
/// query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Create a page request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        let size = if size == 0 {
            1
        } else if size > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            size
        };
        Self { page, size }
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of elements per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Row offset of the first element of this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Row limit for this page.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of a listing plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The elements of this page, in store-native order.
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub page: u32,
    /// Requested page size (the last page may hold fewer elements).
    pub size: u32,
    /// Total number of elements across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page from its content, the originating request and the total
    /// element count.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.size();
        let total_pages = total_elements
            .div_ceil(u64::from(size))
            .try_into()
            .unwrap_or(u32::MAX);
        Self {
            content,
            page: request.page(),
            size,
            total_elements,
            total_pages,
        }
    }

    /// Map the content of this page, preserving all metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps_size() {
        assert_eq!(PageRequest::new(0, 0).size(), 1);
        assert_eq!(PageRequest::new(0, 500).size(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 25).size(), 25);
    }

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 60);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.size, 3);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::new(Vec::new(), PageRequest::default(), 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_page_map_preserves_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_elements, 5);
        assert_eq!(mapped.total_pages, 3);
    }
}
