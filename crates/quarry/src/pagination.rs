//! Fixed-size, offset-based pages.

use quarry_core::{descriptor::PageNumber, Error, Result};

/// The page size of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: u64,
}

/// The rows of one page: `LIMIT limit OFFSET offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(page_size: u64) -> Pagination {
        assert!(page_size > 0, "page size must be at least 1");
        Pagination { page_size }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Computes the window of `page`.
    ///
    /// Pages are 1-based. Anything that is not a positive integer is
    /// rejected, never clamped.
    pub fn window(&self, page: i64) -> Result<Window> {
        if page < 1 {
            return Err(Error::invalid_page(format!(
                "page must be a positive integer; page={page}"
            )));
        }

        let page = page as u64;
        let offset = (page - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| Error::invalid_page(format!("page {page} is out of range")))?;

        Ok(Window {
            page,
            limit: self.page_size,
            offset,
        })
    }

    /// Like [`Pagination::window`], for a page as sent on the wire. An absent
    /// page is the first page.
    pub fn window_for(&self, page: Option<&PageNumber>) -> Result<Window> {
        match page {
            None => self.window(1),
            Some(PageNumber::Integer(page)) => self.window(*page),
            Some(PageNumber::Other(value)) => Err(Error::invalid_page(format!(
                "page must be a positive integer; page={value}"
            ))),
        }
    }
}

impl Window {
    /// Whether a total row count should be issued alongside this page.
    ///
    /// Only the first page of a result set counts; later pages reuse the
    /// total the caller already has.
    pub fn wants_total(&self) -> bool {
        self.page == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let window = Pagination::new(20).window(1).unwrap();
        assert_eq!(window.limit, 20);
        assert_eq!(window.offset, 0);
        assert!(window.wants_total());
    }

    #[test]
    fn later_pages_skip_previous_rows() {
        let window = Pagination::new(20).window(3).unwrap();
        assert_eq!(window.offset, 40);
        assert!(!window.wants_total());
    }

    #[test]
    fn non_positive_pages_are_rejected() {
        for page in [0, -1, i64::MIN] {
            let err = Pagination::new(20).window(page).unwrap_err();
            assert!(err.is_invalid_page(), "page={page}; err={err}");
        }
    }

    #[test]
    fn non_integer_pages_are_rejected() {
        let pagination = Pagination::new(20);

        for value in [serde_json::json!(1.5), serde_json::json!("2"), serde_json::json!(true)] {
            let page = PageNumber::from(value);
            let err = pagination.window_for(Some(&page)).unwrap_err();
            assert!(err.is_invalid_page());
        }
    }

    #[test]
    fn absent_page_is_first_page() {
        let window = Pagination::new(10).window_for(None).unwrap();
        assert_eq!(window.page, 1);
    }

    #[test]
    fn overflowing_offset_is_rejected() {
        let err = Pagination::new(u64::MAX).window(3).unwrap_err();
        assert!(err.is_invalid_page());
    }
}
