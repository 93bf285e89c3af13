//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose list/detail use-cases to the UI shell via FRB.
//! - Flatten core types into plain string/number envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The roster is loaded at most once per process and never replaced.
//! - Filter and page state stay on the UI side; every call is stateless.

use log::{info, warn};
use roster_core::{
    core_version as core_version_inner, current_week, init_logging as init_logging_inner,
    ping as ping_inner, FilterCriteria, ProfileRecord, Roster, RosterService, PAGE_SIZE_DEFAULT,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const ROSTER_FILE_NAME: &str = "roster.json";
const ROSTER_PATH_ENV: &str = "ROSTER_DATA_PATH";
static ROSTER: OnceLock<Roster> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Card-level summary for the list grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCard {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Domain display labels, in record order.
    pub domain_labels: Vec<String>,
}

/// One list page for the current filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterListResponse {
    pub items: Vec<RosterCard>,
    /// Page the items belong to (1-indexed).
    pub page: u32,
    /// Page count, never below 1.
    pub total_pages: u32,
    pub total_matched: u32,
    /// Whether prev/next controls should be shown.
    pub show_pagination: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Detail view envelope; `found == false` means an unknown id or no roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDetailResponse {
    pub found: bool,
    pub card: Option<RosterCard>,
    /// Derived period bucket label.
    pub period: String,
    pub related: Vec<RosterCard>,
    pub message: String,
}

/// Featured-profile envelope for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFeaturedResponse {
    /// `false` when the roster is missing or empty.
    pub found: bool,
    pub card: Option<RosterCard>,
    /// First quote resource content, else the first thought.
    pub highlighted_quote: Option<String>,
    /// Week number the profile was picked for.
    pub week: u32,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterActionResponse {
    pub ok: bool,
    pub message: String,
}

/// Loads the roster dataset from `path`, or from `ROSTER_DATA_PATH` /
/// `<temp_dir>/roster.json` when `path` is blank.
///
/// # FFI contract
/// - Sync call; reads and decodes the dataset file.
/// - Loads at most once per process; later calls report the installed roster.
/// - Never panics; failures are returned in `message` with `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_load(path: String) -> RosterActionResponse {
    if let Some(roster) = ROSTER.get() {
        return RosterActionResponse {
            ok: true,
            message: format!("Roster already loaded ({} profiles).", roster.len()),
        };
    }
    let path = resolve_roster_path(path.as_str());
    match Roster::load(&path) {
        Ok(roster) => install_roster(&ROSTER, roster),
        Err(err) => {
            warn!("event=ffi_roster_load module=ffi status=error");
            RosterActionResponse {
                ok: false,
                message: format!("roster_load failed: {err}"),
            }
        }
    }
}

/// Returns one list page for raw UI field values.
///
/// `period` and `domain` take dropdown values (`all` or a known tag); other
/// values match nothing. `page = 0` is treated as page 1.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; reports a missing roster in `message`.
/// - `total_pages` is never below 1.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_list(query: String, period: String, domain: String, page: u32) -> RosterListResponse {
    let Some(roster) = ROSTER.get() else {
        return RosterListResponse {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total_matched: 0,
            show_pagination: false,
            message: "roster_list failed: roster not loaded".to_string(),
        };
    };
    list_from(roster, &query, &period, &domain, page)
}

/// Returns the detail projection for profile `id`.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown ids and a missing roster return `found == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_detail(id: u32) -> RosterDetailResponse {
    match ROSTER.get() {
        Some(roster) => detail_from(roster, id),
        None => not_found("roster_detail failed: roster not loaded".to_string()),
    }
}

/// Returns the profile featured for the current local week.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; a missing or empty roster returns `found == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_featured() -> RosterFeaturedResponse {
    let week = current_week();
    match ROSTER.get() {
        Some(roster) => featured_from(roster, week),
        None => RosterFeaturedResponse {
            found: false,
            card: None,
            highlighted_quote: None,
            week,
            message: "roster_featured failed: roster not loaded".to_string(),
        },
    }
}

fn install_roster(cell: &OnceLock<Roster>, roster: Roster) -> RosterActionResponse {
    let count = roster.len();
    match cell.set(roster) {
        Ok(()) => {
            info!(
                "event=ffi_roster_load module=ffi status=ok count={}",
                count
            );
            RosterActionResponse {
                ok: true,
                message: format!("Loaded {count} profiles."),
            }
        }
        Err(_) => {
            let installed = cell.get().map(Roster::len).unwrap_or_default();
            warn!(
                "event=ffi_roster_load module=ffi status=skipped reason=already_loaded count={}",
                installed
            );
            RosterActionResponse {
                ok: true,
                message: format!("Roster already loaded ({installed} profiles)."),
            }
        }
    }
}

fn featured_from(roster: &Roster, week: u32) -> RosterFeaturedResponse {
    match RosterService::new(roster).featured(week) {
        Some(record) => RosterFeaturedResponse {
            found: true,
            card: Some(to_card(record)),
            highlighted_quote: record.highlighted_quote().map(str::to_string),
            week,
            message: String::new(),
        },
        None => RosterFeaturedResponse {
            found: false,
            card: None,
            highlighted_quote: None,
            week,
            message: "Roster is empty.".to_string(),
        },
    }
}

fn list_from(
    roster: &Roster,
    query: &str,
    period: &str,
    domain: &str,
    page: u32,
) -> RosterListResponse {
    let criteria = FilterCriteria::from_raw(query, period, domain);
    let page_number = usize::try_from(page).unwrap_or(usize::MAX);
    let listed = RosterService::new(roster).list_page(&criteria, page_number);
    let message = if listed.is_empty_result() {
        "No matching profiles.".to_string()
    } else {
        format!("Found {} profile(s).", listed.total_matched)
    };
    RosterListResponse {
        items: listed.items.into_iter().map(to_card).collect(),
        page: to_u32(listed.page_number),
        total_pages: to_u32(listed.total_pages),
        total_matched: to_u32(listed.total_matched),
        show_pagination: listed.nav.is_visible(),
        message,
    }
}

fn detail_from(roster: &Roster, id: u32) -> RosterDetailResponse {
    match RosterService::new(roster).profile_detail(id) {
        Ok(detail) => RosterDetailResponse {
            found: true,
            card: Some(to_card(detail.record)),
            period: detail.period.as_str().to_string(),
            related: detail.related.into_iter().map(to_card).collect(),
            message: String::new(),
        },
        Err(err) => not_found(err.to_string()),
    }
}

fn not_found(message: String) -> RosterDetailResponse {
    RosterDetailResponse {
        found: false,
        card: None,
        period: String::new(),
        related: Vec::new(),
        message,
    }
}

fn to_card(record: &ProfileRecord) -> RosterCard {
    RosterCard {
        id: record.id,
        name: record.name.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        image: record.image.clone(),
        domain_labels: record
            .domains
            .iter()
            .map(|domain| domain.label().to_string())
            .collect(),
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn resolve_roster_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        return PathBuf::from(trimmed);
    }
    if let Ok(from_env) = std::env::var(ROSTER_PATH_ENV) {
        let from_env = from_env.trim();
        if !from_env.is_empty() {
            return PathBuf::from(from_env);
        }
    }
    std::env::temp_dir().join(ROSTER_FILE_NAME)
}

/// Page size used by list responses.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_page_size() -> u32 {
    to_u32(PAGE_SIZE_DEFAULT)
}
