//! Core domain logic for the leader roster.
//! This crate is the single source of truth for filtering and paging rules.

pub mod logging;
pub mod model;
pub mod roster;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::period::{classify_period, parse_start_year, PeriodBucket};
pub use model::profile::{
    Domain, PersonalInfo, ProfileId, ProfileRecord, ResourceItem, ResourceType, TimelineEntry,
};
pub use roster::store::{
    current_week, week_of_year, Roster, RosterError, RosterResult, RELATED_DEFAULT_LIMIT,
};
pub use search::filter::{filter_roster, matches, FilterCriteria, Selector, SELECTOR_ALL};
pub use search::page::{paginate, total_pages, PageNav};
pub use service::browse_service::{
    BrowseConfig, BrowseError, BrowseResult, ListPage, ProfileDetail, RosterService,
    PAGE_SIZE_DEFAULT,
};
pub use service::session::BrowseSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
