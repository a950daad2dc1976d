use serde::{Deserialize, Serialize};

use crate::error::{PagingError, PagingResult};

/// Pagination request parameters for page-number based pagination
///
/// # Example
/// ```
/// use paged_list_api::pagination::PageRequest;
///
/// let first = PageRequest::new(1, 100).unwrap();
/// assert_eq!(first.offset(), 0);
///
/// let third = PageRequest::new(3, 100).unwrap();
/// assert_eq!(third.offset(), 200);
/// assert_eq!(third.limit(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `page_number` - One-based index of the requested page
    /// * `page_size` - Maximum number of items on any page
    ///
    /// # Errors
    /// * `PagingError::InvalidArgument` if either argument is below 1
    pub fn new(page_number: usize, page_size: usize) -> PagingResult<Self> {
        validate(page_number, page_size)?;
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items to skip before this page
    pub fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of items to fetch for this page
    pub fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 20,
        }
    }
}

/// Position of one page within the whole collection
///
/// Computed once the total item count is known and never mutated afterwards.
/// When `page_count` is zero the collection is empty and the item index
/// fields carry no meaning.
///
/// # Example
/// ```
/// use paged_list_api::pagination::PageMetadata;
///
/// let meta = PageMetadata::compute(250, 3, 100).unwrap();
/// assert_eq!(meta.page_count, 3);
/// assert_eq!(meta.first_item_on_page, 201);
/// assert_eq!(meta.last_item_on_page, 250);
/// assert!(meta.is_last_page);
/// assert!(!meta.has_next_page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageMetadata {
    pub total_item_count: usize,
    pub page_size: usize,
    pub page_number: usize,
    pub page_count: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub first_item_on_page: usize,
    pub last_item_on_page: usize,
}

impl PageMetadata {
    /// Compute the metadata of a page
    ///
    /// # Arguments
    /// * `total_item_count` - Result of a count over the whole collection
    /// * `page_number` - One-based index of the page
    /// * `page_size` - Maximum number of items on any page
    ///
    /// A `page_number` past the last page is accepted and yields
    /// `has_next_page = false` and `is_last_page = true`.
    ///
    /// # Errors
    /// * `PagingError::InvalidArgument` if `page_number` or `page_size` is below 1
    pub fn compute(
        total_item_count: usize,
        page_number: usize,
        page_size: usize,
    ) -> PagingResult<Self> {
        validate(page_number, page_size)?;
        Ok(Self::from_parts(total_item_count, page_number, page_size))
    }

    /// Compute the metadata for an already validated request
    pub fn for_request(total_item_count: usize, request: PageRequest) -> Self {
        Self::from_parts(total_item_count, request.page_number, request.page_size)
    }

    fn from_parts(total_item_count: usize, page_number: usize, page_size: usize) -> Self {
        let page_count = if total_item_count > 0 {
            total_item_count.div_ceil(page_size)
        } else {
            0
        };

        let first_item_on_page = (page_number - 1)
            .saturating_mul(page_size)
            .saturating_add(1);
        let last_item_on_page = first_item_on_page
            .saturating_add(page_size - 1)
            .min(total_item_count);

        Self {
            total_item_count,
            page_size,
            page_number,
            page_count,
            has_previous_page: page_number > 1,
            has_next_page: page_number < page_count,
            is_first_page: page_number == 1,
            is_last_page: page_number >= page_count,
            first_item_on_page,
            last_item_on_page,
        }
    }

    /// The collection holds no items
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// The requested page lies after the last page of the collection
    pub fn is_beyond_last_page(&self) -> bool {
        self.page_number > self.page_count
    }

    /// Number of items a fetch for this page should have returned
    ///
    /// Zero for an empty collection or a page past the end.
    pub fn expected_item_count(&self) -> usize {
        if self.is_empty() || self.is_beyond_last_page() {
            0
        } else {
            self.last_item_on_page - self.first_item_on_page + 1
        }
    }
}

/// Compute the metadata of a page
///
/// Free-function form of [`PageMetadata::compute`].
pub fn compute(
    total_item_count: usize,
    page_number: usize,
    page_size: usize,
) -> PagingResult<PageMetadata> {
    PageMetadata::compute(total_item_count, page_number, page_size)
}

fn validate(page_number: usize, page_size: usize) -> PagingResult<()> {
    if page_number < 1 {
        return Err(PagingError::InvalidArgument {
            name: "page_number",
            value: page_number,
            reason: "PageNumber cannot be below 1.",
        });
    }
    if page_size < 1 {
        return Err(PagingError::InvalidArgument {
            name: "page_size",
            value: page_size,
            reason: "PageSize cannot be less than 1.",
        });
    }
    Ok(())
}
