use serde::Serialize;

use crate::error::{PagingError, PagingResult};
use crate::pagination::{PageMetadata, PageRequest};

/// One page of a larger collection together with its position metadata
///
/// The subset and the total count come from two separate reads against the
/// collection. They only line up when both reads saw the same snapshot, which
/// [`PagedList::verify`] checks after the fact.
///
/// # Example
/// ```
/// use paged_list_api::{PageRequest, PagedList};
///
/// let request = PageRequest::new(2, 3).unwrap();
/// let page = PagedList::new(vec!["d", "e", "f"], 7, request);
///
/// assert_eq!(page.metadata().page_count, 3);
/// assert_eq!(page.metadata().first_item_on_page, 4);
/// assert!(page.metadata().has_next_page);
/// assert!(page.verify().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedList<T> {
    subset: Vec<T>,
    metadata: PageMetadata,
}

impl<T> PagedList<T> {
    /// Create a page from an already fetched subset
    ///
    /// # Arguments
    /// * `subset` - Rows returned by the offset/limit fetch
    /// * `total_item_count` - Rows counted over the whole collection
    /// * `request` - The page that was fetched
    ///
    /// The subset is dropped when the count reports an empty collection.
    pub fn new(subset: Vec<T>, total_item_count: usize, request: PageRequest) -> Self {
        let metadata = PageMetadata::for_request(total_item_count, request);
        let subset = if total_item_count > 0 { subset } else { Vec::new() };
        Self { subset, metadata }
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn items(&self) -> &[T] {
        &self.subset
    }

    pub fn into_items(self) -> Vec<T> {
        self.subset
    }

    pub fn len(&self) -> usize {
        self.subset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.subset.iter()
    }

    /// Check that the subset size agrees with the counted total
    ///
    /// # Errors
    /// * `PagingError::InconsistentSubset` when the fetched rows and the count
    ///   disagree, e.g. because rows were inserted between the two reads
    pub fn verify(&self) -> PagingResult<()> {
        let expected = self.metadata.expected_item_count();
        let actual = self.subset.len();
        if expected != actual {
            return Err(PagingError::InconsistentSubset { expected, actual });
        }
        Ok(())
    }

    /// Transform every item while keeping the metadata
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            subset: self.subset.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page_number: usize, page_size: usize) -> PageRequest {
        PageRequest::new(page_number, page_size).unwrap()
    }

    #[test]
    fn test_subset_dropped_when_count_is_zero() {
        let page = PagedList::new(vec![1, 2, 3], 0, request(1, 10));
        assert!(page.is_empty());
        assert_eq!(page.metadata().page_count, 0);
        assert!(page.verify().is_ok());
    }

    #[test]
    fn test_verify_detects_short_subset() {
        let page = PagedList::new((1..=40).collect::<Vec<_>>(), 250, request(3, 100));
        assert_eq!(
            page.verify(),
            Err(PagingError::InconsistentSubset {
                expected: 50,
                actual: 40
            })
        );
    }

    #[test]
    fn test_verify_accepts_page_beyond_end() {
        let page: PagedList<u32> = PagedList::new(Vec::new(), 250, request(9, 100));
        assert!(page.metadata().is_beyond_last_page());
        assert!(page.verify().is_ok());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = PagedList::new(vec![1, 2], 2, request(1, 5));
        let meta = *page.metadata();
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items(), &["1".to_string(), "2".to_string()]);
        assert_eq!(*mapped.metadata(), meta);
    }

    #[test]
    fn test_iterates_subset_in_order() {
        let page = PagedList::new(vec!['a', 'b', 'c'], 3, request(1, 3));
        let collected: String = page.iter().collect();
        assert_eq!(collected, "abc");
        assert_eq!(page.into_items(), vec!['a', 'b', 'c']);
    }
}
