//! Fixed-size windowing of an in-memory list.
//!
//! Pages are 1-based. A request outside `1..=total_pages` is clamped to the
//! nearest valid page, so callers never receive an empty window for a list
//! that has items.

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of a list plus what the pager needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    /// Page actually served (after clamping)
    pub page: usize,
    /// `0` for an empty list
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> PageWindow<T> {
    /// Page count as displayed: never below 1
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The pager is hidden when everything fits on one page
    pub fn needs_pager(&self) -> bool {
        self.total_pages > 1
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    (len + size - 1) / size
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T: Clone>(list: &[T], page_size: usize, page: usize) -> PageWindow<T> {
    let size = page_size.max(1);
    let total = total_pages(list.len(), size);
    let page = clamp_page(page, total);

    let start = ((page - 1) * size).min(list.len());
    let end = (start + size).min(list.len());

    PageWindow {
        items: list[start..end].to_vec(),
        page,
        total_pages: total,
        total_count: list.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<u32> {
        (1..=12).collect()
    }

    #[test]
    fn test_first_and_last_page() {
        let list = twelve();

        let first = paginate(&list, 5, 1);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&list, 5, 3);
        assert_eq!(last.items, vec![11, 12]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let list = twelve();

        let below = paginate(&list, 5, 0);
        assert_eq!(below.page, 1);
        assert_eq!(below.items.len(), 5);

        let beyond = paginate(&list, 5, 9);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items, vec![11, 12]);
    }

    #[test]
    fn test_empty_list() {
        let window = paginate::<u32>(&[], DEFAULT_PAGE_SIZE, 1);
        assert!(window.items.is_empty());
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.display_total_pages(), 1);
        assert_eq!(window.page, 1);
        assert!(!window.has_next());
        assert!(!window.needs_pager());
    }

    #[test]
    fn test_exact_multiple() {
        let list: Vec<u32> = (0..10).collect();
        assert_eq!(total_pages(list.len(), 5), 2);
        assert_eq!(paginate(&list, 5, 2).items, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let list = twelve();
        let window = paginate(&list, 0, 2);
        assert_eq!(window.items, vec![2]);
        assert_eq!(window.total_pages, 12);
    }

    #[test]
    fn test_pager_visibility() {
        assert!(!paginate(&[1, 2, 3, 4, 5], 5, 1).needs_pager());
        assert!(paginate(&[1, 2, 3, 4, 5, 6], 5, 1).needs_pager());
    }
}
