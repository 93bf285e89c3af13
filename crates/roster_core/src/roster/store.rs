//! Roster storage, loading and lookups.

use crate::model::profile::{ProfileId, ProfileRecord};
use chrono::{Datelike, Local};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default number of related profiles shown on a detail view.
pub const RELATED_DEFAULT_LIMIT: usize = 3;

pub type RosterResult<T> = Result<T, RosterError>;

/// Roster construction and loading error.
#[derive(Debug)]
pub enum RosterError {
    /// Dataset file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Dataset text is not a valid profile array.
    Json(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(ProfileId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read roster `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid roster data: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate profile id: {id}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Read-only profile collection with an id index.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<ProfileRecord>,
    index: HashMap<ProfileId, usize>,
}

impl Roster {
    /// Builds a roster, keeping the given order.
    ///
    /// # Errors
    /// - Returns `DuplicateId` for the first id seen twice.
    pub fn new(records: Vec<ProfileRecord>) -> RosterResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id, position).is_some() {
                return Err(RosterError::DuplicateId(record.id));
            }
        }
        Ok(Self { records, index })
    }

    /// Decodes a JSON array of profiles.
    pub fn from_json_str(json: &str) -> RosterResult<Self> {
        Self::decode(json, "inline")
    }

    /// Reads and decodes a JSON dataset file.
    pub fn load(path: impl AsRef<Path>) -> RosterResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&text, "file")
    }

    fn decode(json: &str, source: &'static str) -> RosterResult<Self> {
        let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
        let roster = Self::new(records)?;
        info!(
            "event=roster_load module=roster status=ok source={} count={}",
            source,
            roster.len()
        );
        Ok(roster)
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up one profile by id.
    pub fn get(&self, id: ProfileId) -> Option<&ProfileRecord> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Resolves `related` ids of profile `id` in declared order.
    ///
    /// Dangling references are skipped; at most `limit` profiles are returned.
    /// An unknown `id` yields an empty list.
    pub fn related(&self, id: ProfileId, limit: usize) -> Vec<&ProfileRecord> {
        let Some(record) = self.get(id) else {
            return Vec::new();
        };
        record
            .related
            .iter()
            .filter_map(|related_id| self.get(*related_id))
            .take(limit)
            .collect()
    }

    /// Profile featured for the given week number, cycling through the roster.
    pub fn featured_for_week(&self, week: u32) -> Option<&ProfileRecord> {
        if self.records.is_empty() {
            return None;
        }
        let position = usize::try_from(week).unwrap_or(usize::MAX) % self.records.len();
        self.records.get(position)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a ProfileRecord;
    type IntoIter = std::slice::Iter<'a, ProfileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Week number for a zero-based day of the year (`0` is January 1st).
pub fn week_of_year(day_of_year: u32) -> u32 {
    day_of_year / 7
}

/// Week number of today's local date.
pub fn current_week() -> u32 {
    week_of_year(Local::now().ordinal0())
}
