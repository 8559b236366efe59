use crate::domain::customer::Customer;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `max(1, ceil(len / page_size))`. A zero page size is treated as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// Rows for a 1-based page. Out-of-range pages yield an empty slice.
pub fn page_slice(customers: &[Customer], page: usize, page_size: usize) -> &[Customer] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= customers.len() {
        return &[];
    }
    let end = (start + page_size).min(customers.len());
    &customers[start..end]
}

/// The materialized rows of one page. Rebuilt from the collection whenever
/// its inputs change; only local deletes patch `rows` in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub page: usize,
    pub page_size: usize,
    pub rows: Vec<Customer>,
}

impl PageView {
    pub fn empty(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            rows: Vec::new(),
        }
    }

    /// Slices `page` out of `customers`, clamping the page first.
    pub fn compute(customers: &[Customer], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page = clamp_page(page, customers.len(), page_size);
        Self {
            page,
            page_size,
            rows: page_slice(customers, page, page_size).to_vec(),
        }
    }

    /// Page one of a freshly fetched collection, regardless of any page
    /// number remembered from before the fetch.
    pub fn first_page(customers: &[Customer], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page: 1,
            page_size,
            rows: customers.iter().take(page_size).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn customers(n: u64) -> Vec<Customer> {
        (1..=n).map(|i| Customer::new(i, format!("First{i}"), format!("Last{i}"))).collect()
    }

    #[rstest]
    #[case(0, 10, 1)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(50, 10, 5)]
    #[case(49, 10, 5)]
    #[case(7, 3, 3)]
    fn test_total_pages(#[case] len: usize, #[case] page_size: usize, #[case] expected: usize) {
        assert_eq!(total_pages(len, page_size), expected);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(9, 10)]
    #[case(23, 10)]
    #[case(50, 10)]
    #[case(17, 4)]
    fn test_every_page_has_expected_length(#[case] len: u64, #[case] page_size: usize) {
        let all = customers(len);
        let pages = total_pages(all.len(), page_size);
        let mut seen = 0;
        for page in 1..=pages {
            let slice = page_slice(&all, page, page_size);
            let expected = page_size.min(all.len().saturating_sub((page - 1) * page_size));
            assert_eq!(slice.len(), expected);
            seen += slice.len();
        }
        assert_eq!(seen, all.len());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 50, 10), 1);
        assert_eq!(clamp_page(9, 50, 10), 5);
        assert_eq!(clamp_page(3, 0, 10), 1);
    }

    #[test]
    fn test_compute_clamps_stale_page() {
        let all = customers(15);
        let view = PageView::compute(&all, 4, 10);
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, crate::domain::customer::CustomerId::from(11u64));
    }

    #[test]
    fn test_first_page_ignores_previous_page() {
        let all = customers(25);
        let view = PageView::first_page(&all, 10);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows, all[..10].to_vec());

        let short = customers(4);
        assert_eq!(PageView::first_page(&short, 10).rows.len(), 4);
    }
}
