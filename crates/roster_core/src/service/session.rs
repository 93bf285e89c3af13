//! Caller-owned list page state.
//!
//! The core filter and pagination functions are stateless. A UI keeps the
//! current criteria and page number itself; `BrowseSession` is that state with
//! the reset rule applied: any criteria change returns to page 1.

use crate::model::period::PeriodBucket;
use crate::model::profile::Domain;
use crate::search::filter::{FilterCriteria, Selector};

/// Filter selections plus the current page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    page: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.page = 1;
    }

    pub fn set_period(&mut self, period: Selector<PeriodBucket>) {
        self.criteria.period = period;
        self.page = 1;
    }

    pub fn set_domain(&mut self, domain: Selector<Domain>) {
        self.criteria.domain = domain;
        self.page = 1;
    }

    /// Replaces every criterion at once.
    pub fn replace_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Advances one page, saturating at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = self.page.saturating_add(1).min(total_pages.max(1));
    }

    /// Goes back one page, saturating at 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::BrowseSession;
    use crate::model::profile::Domain;
    use crate::search::filter::Selector;

    #[test]
    fn criteria_change_resets_page() {
        let mut session = BrowseSession::new();
        session.next_page(3);
        session.next_page(3);
        assert_eq!(session.page(), 3);

        session.set_domain(Selector::Only(Domain::QuanSu));
        assert_eq!(session.page(), 1);

        session.next_page(3);
        session.set_query("giáp");
        assert_eq!(session.page(), 1);
        assert_eq!(session.criteria().query, "giáp");
    }

    #[test]
    fn paging_saturates() {
        let mut session = BrowseSession::new();
        session.prev_page();
        assert_eq!(session.page(), 1);
        session.next_page(1);
        assert_eq!(session.page(), 1);
        session.next_page(0);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn next_page_at_max_does_not_overflow() {
        let mut session = BrowseSession::new();
        session.next_page(usize::MAX);
        assert_eq!(session.page(), 2);
        session.page = usize::MAX;
        session.next_page(usize::MAX);
        assert_eq!(session.page(), usize::MAX);
    }
}
