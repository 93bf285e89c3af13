//! Historical period buckets derived from a profile's active period.
//!
//! # Invariants
//! - Upper bounds are inclusive: a start year of exactly 1945 is `1910-1945`.
//! - Classification never fails; unparseable input lands in the last bucket.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static LEADING_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?(\d+)").expect("valid leading year regex"));

/// Coarse historical period used by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodBucket {
    /// Start year up to and including 1945.
    Early,
    /// 1946 through 1975.
    Resistance,
    /// 1976 through 1986.
    PostReunification,
    /// After 1986, and the fallback for malformed input.
    Renovation,
}

impl PeriodBucket {
    /// All buckets in chronological order.
    pub const ALL: [PeriodBucket; 4] = [
        PeriodBucket::Early,
        PeriodBucket::Resistance,
        PeriodBucket::PostReunification,
        PeriodBucket::Renovation,
    ];

    /// Selector label, e.g. `1945-1975`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Early => "1910-1945",
            Self::Resistance => "1945-1975",
            Self::PostReunification => "1975-1986",
            Self::Renovation => "1986-present",
        }
    }

    /// Parses a selector label. `1986-nay` is accepted for the last bucket.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1910-1945" => Some(Self::Early),
            "1945-1975" => Some(Self::Resistance),
            "1975-1986" => Some(Self::PostReunification),
            "1986-present" | "1986-nay" => Some(Self::Renovation),
            _ => None,
        }
    }

    fn from_start_year(year: u64) -> Self {
        match year {
            ..=1945 => Self::Early,
            1946..=1975 => Self::Resistance,
            1976..=1986 => Self::PostReunification,
            _ => Self::Renovation,
        }
    }
}

impl Display for PeriodBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the start year from an active-period string such as `"1960-1975"`.
///
/// Reads the leading decimal digits of the text before the first `-`, after
/// trimming whitespace, so `"1930s-1945"` yields 1930. Returns `None` when no
/// digits lead the token or the value overflows.
pub fn parse_start_year(active_period: &str) -> Option<u64> {
    let head = active_period
        .split_once('-')
        .map_or(active_period, |(head, _)| head)
        .trim();
    LEADING_YEAR_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

/// Classifies an active-period string into its period bucket.
pub fn classify_period(active_period: &str) -> PeriodBucket {
    match parse_start_year(active_period) {
        Some(year) => PeriodBucket::from_start_year(year),
        None => {
            warn!(
                "event=period_unparseable module=model status=fallback bucket={} chars={}",
                PeriodBucket::Renovation,
                active_period.chars().count()
            );
            PeriodBucket::Renovation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_period, parse_start_year, PeriodBucket};

    #[test]
    fn boundaries_belong_to_the_earlier_bucket() {
        assert_eq!(classify_period("1945-1960"), PeriodBucket::Early);
        assert_eq!(classify_period("1946-1960"), PeriodBucket::Resistance);
        assert_eq!(classify_period("1975-1980"), PeriodBucket::Resistance);
        assert_eq!(classify_period("1976-1980"), PeriodBucket::PostReunification);
        assert_eq!(classify_period("1986-2000"), PeriodBucket::PostReunification);
        assert_eq!(classify_period("1987-2000"), PeriodBucket::Renovation);
    }

    #[test]
    fn start_year_tolerates_padding_and_suffixes() {
        assert_eq!(parse_start_year(" 1930 - 1945"), Some(1930));
        assert_eq!(parse_start_year("1930s-1945"), Some(1930));
        assert_eq!(parse_start_year("1911"), Some(1911));
        assert_eq!(parse_start_year("+1911-1969"), Some(1911));
    }

    #[test]
    fn malformed_start_year_falls_back_to_last_bucket() {
        assert_eq!(parse_start_year("unknown-1945"), None);
        assert_eq!(parse_start_year("-1945"), None);
        assert_eq!(parse_start_year(""), None);
        assert_eq!(parse_start_year("99999999999999999999999-1"), None);
        assert_eq!(classify_period("khoảng 1930-1945"), PeriodBucket::Renovation);
        assert_eq!(classify_period(""), PeriodBucket::Renovation);
    }

    #[test]
    fn labels_parse_back() {
        for bucket in PeriodBucket::ALL {
            assert_eq!(PeriodBucket::parse(bucket.as_str()), Some(bucket));
        }
        assert_eq!(PeriodBucket::parse("1986-nay"), Some(PeriodBucket::Renovation));
        assert_eq!(PeriodBucket::parse("1900-1910"), None);
    }
}
