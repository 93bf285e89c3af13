//! List and detail use-case service.
//!
//! # Responsibility
//! - Produce one list page for a criteria set and page number.
//! - Assemble the detail projection for one profile.
//!
//! # Invariants
//! - The service holds no page or filter state between calls.
//! - Page size and related limit are normalized before use.

use crate::model::period::{classify_period, PeriodBucket};
use crate::model::profile::{ProfileId, ProfileRecord, ResourceItem};
use crate::roster::store::{current_week, Roster, RELATED_DEFAULT_LIMIT};
use crate::search::filter::{filter_roster, FilterCriteria};
use crate::search::page::{paginate, PageNav};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Profiles per list page.
pub const PAGE_SIZE_DEFAULT: usize = 6;
const PAGE_SIZE_MAX: usize = 50;
const RELATED_LIMIT_MAX: usize = 10;

/// Service error for browse use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// No profile has the requested id.
    ProfileNotFound(ProfileId),
}

impl Display for BrowseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProfileNotFound(id) => write!(f, "profile not found: {id}"),
        }
    }
}

impl Error for BrowseError {}

pub type BrowseResult<T> = Result<T, BrowseError>;

/// Tunables for list and detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseConfig {
    pub page_size: usize,
    pub related_limit: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_DEFAULT,
            related_limit: RELATED_DEFAULT_LIMIT,
        }
    }
}

impl BrowseConfig {
    /// Returns a copy with zero values defaulted and large values capped.
    pub fn normalized(self) -> Self {
        Self {
            page_size: normalize_limit(self.page_size, PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX),
            related_limit: normalize_limit(
                self.related_limit,
                RELATED_DEFAULT_LIMIT,
                RELATED_LIMIT_MAX,
            ),
        }
    }
}

/// One rendered list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<'r> {
    /// Records on this page, in roster order.
    pub items: Vec<&'r ProfileRecord>,
    /// Page number the items were sliced for.
    pub page_number: usize,
    /// Page count for the full matched set, at least 1.
    pub total_pages: usize,
    /// Number of records matching the criteria across all pages.
    pub total_matched: usize,
    pub nav: PageNav,
}

impl ListPage<'_> {
    /// True when nothing matched the criteria.
    pub fn is_empty_result(&self) -> bool {
        self.total_matched == 0
    }
}

/// Detail projection for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetail<'r> {
    pub record: &'r ProfileRecord,
    /// Derived period bucket of the record.
    pub period: PeriodBucket,
    /// Resolved related profiles, dangling ids skipped.
    pub related: Vec<&'r ProfileRecord>,
    /// Resources with enough data to render.
    pub displayable_resources: Vec<&'r ResourceItem>,
}

/// Browse facade over an immutable roster.
pub struct RosterService<'r> {
    roster: &'r Roster,
    config: BrowseConfig,
}

impl<'r> RosterService<'r> {
    /// Creates a service with default configuration.
    pub fn new(roster: &'r Roster) -> Self {
        Self::with_config(roster, BrowseConfig::default())
    }

    /// Creates a service with custom configuration, normalized on entry.
    pub fn with_config(roster: &'r Roster, config: BrowseConfig) -> Self {
        Self {
            roster,
            config: config.normalized(),
        }
    }

    /// Effective configuration after normalization.
    pub fn config(&self) -> BrowseConfig {
        self.config
    }

    /// Filters the roster and returns page `page_number` of the result.
    pub fn list_page(&self, criteria: &FilterCriteria, page_number: usize) -> ListPage<'r> {
        let matched = filter_roster(self.roster, criteria);
        let page_size = self.config.page_size;
        let nav = PageNav::new(matched.len(), page_size, page_number);
        let items = paginate(&matched, page_size, nav.page).to_vec();
        debug!(
            "event=roster_list module=service status=ok matched={} page={} total_pages={} items={}",
            matched.len(),
            nav.page,
            nav.total_pages,
            items.len()
        );
        ListPage {
            items,
            page_number: nav.page,
            total_pages: nav.total_pages,
            total_matched: matched.len(),
            nav,
        }
    }

    /// Builds the detail projection for profile `id`.
    pub fn profile_detail(&self, id: ProfileId) -> BrowseResult<ProfileDetail<'r>> {
        let record = self
            .roster
            .get(id)
            .ok_or(BrowseError::ProfileNotFound(id))?;
        Ok(ProfileDetail {
            record,
            period: classify_period(&record.personal_info.active_period),
            related: self.roster.related(id, self.config.related_limit),
            displayable_resources: record.displayable_resources().collect(),
        })
    }

    /// Profile featured for `week`, if the roster is non-empty.
    pub fn featured(&self, week: u32) -> Option<&'r ProfileRecord> {
        self.roster.featured_for_week(week)
    }

    /// Profile featured for the current local week.
    pub fn featured_now(&self) -> Option<&'r ProfileRecord> {
        self.featured(current_week())
    }
}

fn normalize_limit(value: usize, default: usize, max: usize) -> usize {
    match value {
        0 => default,
        value if value > max => max,
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_limit, BrowseConfig};

    #[test]
    fn normalize_limit_defaults_and_caps() {
        assert_eq!(normalize_limit(0, 6, 50), 6);
        assert_eq!(normalize_limit(80, 6, 50), 50);
        assert_eq!(normalize_limit(12, 6, 50), 12);
    }

    #[test]
    fn config_normalization_applies_to_both_fields() {
        let config = BrowseConfig {
            page_size: 0,
            related_limit: 99,
        }
        .normalized();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.related_limit, 10);
    }
}
