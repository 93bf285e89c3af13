//! Multi-criteria profile filter.
//!
//! # Responsibility
//! - Combine query, period and domain predicates with logical AND.
//! - Parse dropdown values into typed selectors.
//!
//! # Invariants
//! - Query matching is a case-folded substring test on name or title.
//! - An unrecognized selector value matches nothing.
//! - `filter_roster` is stable and idempotent.

use crate::model::period::{classify_period, PeriodBucket};
use crate::model::profile::{Domain, ProfileRecord};

/// Dropdown value accepted by the `all` filter option.
pub const SELECTOR_ALL: &str = "all";

/// One dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// No restriction.
    All,
    /// Restrict to a single known value.
    Only(T),
    /// A value outside the fixed enumeration; never matches.
    Unrecognized(String),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Copy + PartialEq> Selector<T> {
    /// Parses a dropdown value with the given value parser.
    ///
    /// Blank input and `all` (any case) both mean no restriction.
    pub fn parse_with(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(SELECTOR_ALL) {
            return Self::All;
        }
        match parse(trimmed) {
            Some(value) => Self::Only(value),
            None => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// Returns whether `value` passes this selector.
    pub fn accepts(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == value,
            Self::Unrecognized(_) => false,
        }
    }

    /// Returns whether this selector leaves its field unrestricted.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Selector<PeriodBucket> {
    /// Parses a period dropdown value.
    pub fn period(raw: &str) -> Self {
        Self::parse_with(raw, PeriodBucket::parse)
    }
}

impl Selector<Domain> {
    /// Parses a domain dropdown value.
    pub fn domain(raw: &str) -> Self {
        Self::parse_with(raw, Domain::parse)
    }
}

/// Active search and filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query matched against name and title.
    pub query: String,
    /// Period bucket selection.
    pub period: Selector<PeriodBucket>,
    /// Domain tag selection.
    pub domain: Selector<Domain>,
}

impl FilterCriteria {
    /// Creates criteria with the given query and no period/domain restriction.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Builds criteria from raw UI field values.
    pub fn from_raw(query: &str, period: &str, domain: &str) -> Self {
        Self {
            query: query.to_string(),
            period: Selector::<PeriodBucket>::period(period),
            domain: Selector::<Domain>::domain(domain),
        }
    }

    /// Replaces the period selection.
    pub fn with_period(mut self, period: Selector<PeriodBucket>) -> Self {
        self.period = period;
        self
    }

    /// Replaces the domain selection.
    pub fn with_domain(mut self, domain: Selector<Domain>) -> Self {
        self.domain = domain;
        self
    }

    /// Returns the query as compared against records.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// Returns whether `record` satisfies every active criterion.
pub fn matches(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    matches_normalized(record, criteria, &criteria.normalized_query())
}

/// Returns the records matching `criteria`, in roster order.
pub fn filter_roster<'a, I>(roster: I, criteria: &FilterCriteria) -> Vec<&'a ProfileRecord>
where
    I: IntoIterator<Item = &'a ProfileRecord>,
{
    let query = criteria.normalized_query();
    roster
        .into_iter()
        .filter(|record| matches_normalized(record, criteria, &query))
        .collect()
}

fn matches_normalized(record: &ProfileRecord, criteria: &FilterCriteria, query: &str) -> bool {
    matches_query(record, query)
        && matches_period(record, &criteria.period)
        && matches_domain(record, &criteria.domain)
}

fn matches_query(record: &ProfileRecord, query: &str) -> bool {
    query.is_empty()
        || record.name.to_lowercase().contains(query)
        || record.title.to_lowercase().contains(query)
}

fn matches_period(record: &ProfileRecord, selector: &Selector<PeriodBucket>) -> bool {
    if selector.is_all() {
        return true;
    }
    selector.accepts(classify_period(&record.personal_info.active_period))
}

fn matches_domain(record: &ProfileRecord, selector: &Selector<Domain>) -> bool {
    match selector {
        Selector::All => true,
        Selector::Only(domain) => record.has_domain(*domain),
        Selector::Unrecognized(_) => false,
    }
}
