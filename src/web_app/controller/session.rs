// web_app/controller/session.rs - Pagination state for the current search

use crate::web_app::model::total_pages;

/// The query/page/total_pages triple for the current search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    /// 1-based page last requested
    pub page: u32,
    /// 0 until a non-empty response has been seen
    pub total_pages: u32,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
        }
    }
}

impl SearchSession {
    /// Start over for a new query
    pub fn reset(&mut self, query: String) {
        self.query = query;
        self.page = 1;
        self.total_pages = 0;
    }

    /// Move to the next page and return it
    pub fn advance(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    pub fn record_total(&mut self, total_hits: u64, per_page: u32) {
        self.total_pages = total_pages(total_hits, per_page);
    }

    /// True once `page` has reached a known, nonzero page count
    pub fn is_exhausted(&self) -> bool {
        self.total_pages > 0 && self.page >= self.total_pages
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = SearchSession::default();
        assert_eq!(session.query, "");
        assert_eq!(session.page, 1);
        assert_eq!(session.total_pages, 0);
        assert!(!session.has_query());
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_reset_clears_pagination() {
        let mut session = SearchSession {
            query: "dogs".to_string(),
            page: 4,
            total_pages: 9,
        };
        session.reset("cats".to_string());
        assert_eq!(session, SearchSession { query: "cats".to_string(), page: 1, total_pages: 0 });
    }

    #[test]
    fn test_exhaustion() {
        let mut session = SearchSession::default();
        session.reset("cats".to_string());
        session.record_total(120, 40);
        assert_eq!(session.total_pages, 3);
        assert!(!session.is_exhausted());

        assert_eq!(session.advance(), 2);
        assert!(!session.is_exhausted());
        assert_eq!(session.advance(), 3);
        assert!(session.is_exhausted());
    }
}
