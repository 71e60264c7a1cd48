//! Month-scoped history paging.

use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::models::stats::HistoryPage;
use crate::utils::validation::is_valid_month;

pub const MAX_PER_PAGE: usize = 100;

/// A validated request for one page of a month's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub month: String,
    pub page: usize,
    pub per_page: usize,
}

impl HistoryQuery {
    pub fn new(month: &str, page: usize, per_page: usize) -> AppResult<Self> {
        if !is_valid_month(month) {
            return Err(AppError::InvalidMonth(month.to_string()));
        }
        if page == 0 {
            return Err(AppError::InvalidPage("page numbers start at 1".into()));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(AppError::InvalidPage(format!(
                "page size must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }

        // offset must stay representable as an SQL integer
        let in_range = (page - 1)
            .checked_mul(per_page)
            .is_some_and(|offset| i64::try_from(offset).is_ok());
        if !in_range {
            return Err(AppError::InvalidPage(format!("page {page} is out of range")));
        }

        Ok(Self {
            month: month.to_string(),
            page,
            per_page,
        })
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    pub fn into_page(self, items: Vec<WorkSession>, total: usize) -> HistoryPage {
        HistoryPage {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total.div_ceil(self.per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_page_and_size() {
        let q = HistoryQuery::new("2024-02", 3, 10).unwrap();
        assert_eq!(q.offset(), 20);
    }

    #[test]
    fn rejects_bad_requests() {
        assert!(matches!(
            HistoryQuery::new("2024-13", 1, 10),
            Err(AppError::InvalidMonth(_))
        ));
        assert!(matches!(
            HistoryQuery::new("2019-05", 1, 10),
            Err(AppError::InvalidMonth(_))
        ));
        assert!(matches!(
            HistoryQuery::new("2024-02", 0, 10),
            Err(AppError::InvalidPage(_))
        ));
        assert!(matches!(
            HistoryQuery::new("2024-02", 1, 101),
            Err(AppError::InvalidPage(_))
        ));
    }

    #[test]
    fn huge_page_numbers_are_rejected() {
        for page in [usize::MAX, usize::MAX / 10] {
            assert!(matches!(
                HistoryQuery::new("2024-02", page, 10),
                Err(AppError::InvalidPage(_))
            ));
        }
        let q = HistoryQuery::new("2024-02", 1_000_000, 100).unwrap();
        assert_eq!(q.offset(), 99_999_900);
    }

    #[test]
    fn total_pages_rounds_up() {
        let q = HistoryQuery::new("2024-02", 1, 10).unwrap();
        assert_eq!(q.clone().into_page(Vec::new(), 21).total_pages, 3);
        assert_eq!(q.into_page(Vec::new(), 0).total_pages, 0);
    }
}
