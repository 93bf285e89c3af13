//! Profile domain model.
//!
//! # Responsibility
//! - Define the biographical record rendered by list and detail views.
//! - Keep wire field names aligned with the bundled JSON dataset.
//!
//! # Invariants
//! - `id` is unique within one roster (checked by `Roster::new`).
//! - `personal_info.active_period` starts with the start year (`"1960-1975"`).
//! - Unknown resource `type` strings decode to `ResourceType::Image`.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a profile inside one roster.
pub type ProfileId = u32;

/// Topical contribution domain attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Political leadership.
    ChinhTri,
    /// Military command.
    QuanSu,
    /// Diplomacy.
    NgoaiGiao,
    /// Ideology and theory.
    TuTuong,
    /// Economic policy.
    KinhTe,
}

impl Domain {
    /// All domains in dropdown order.
    pub const ALL: [Domain; 5] = [
        Domain::ChinhTri,
        Domain::QuanSu,
        Domain::NgoaiGiao,
        Domain::TuTuong,
        Domain::KinhTe,
    ];

    /// Wire tag, e.g. `chinh_tri`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChinhTri => "chinh_tri",
            Self::QuanSu => "quan_su",
            Self::NgoaiGiao => "ngoai_giao",
            Self::TuTuong => "tu_tuong",
            Self::KinhTe => "kinh_te",
        }
    }

    /// Human-readable label shown on cards and filter options.
    pub fn label(self) -> &'static str {
        match self {
            Self::ChinhTri => "Chính trị",
            Self::QuanSu => "Quân sự",
            Self::NgoaiGiao => "Ngoại giao",
            Self::TuTuong => "Tư tưởng",
            Self::KinhTe => "Kinh tế",
        }
    }

    /// Parses a wire tag. Matching is exact after trimming.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|domain| domain.as_str() == value)
    }
}

/// Kind of a supporting resource item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Quote,
    Video,
    Image,
    Pdf,
    Audio,
}

impl ResourceType {
    /// Wire tag, e.g. `pdf`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Video => "video",
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Audio => "audio",
        }
    }

    /// Maps a raw dataset tag onto the fixed set.
    ///
    /// Unknown tags fall back to `Image`; the dataset treats untyped media as
    /// pictures.
    pub fn coerce(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "quote" => Self::Quote,
            "video" => Self::Video,
            "image" => Self::Image,
            "pdf" => Self::Pdf,
            "audio" => Self::Audio,
            other => {
                warn!(
                    "event=resource_type_coerced module=model status=fallback raw={} coerced=image",
                    other
                );
                Self::Image
            }
        }
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::coerce(&raw))
    }
}

/// Personal facts block shown in the detail hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub birth: String,
    pub death: String,
    pub hometown: String,
    /// Free-text range whose leading integer is the start year.
    pub active_period: String,
    #[serde(default)]
    pub party_membership: String,
}

/// One dated milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Supporting material attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    /// Serialized as `type` to match the dataset schema.
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ResourceItem {
    /// Returns whether the item carries what its kind needs to be shown.
    ///
    /// Quotes need content text; media kinds need a URL.
    pub fn is_displayable(&self) -> bool {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(|text| !text.trim().is_empty())
                .unwrap_or(false)
        };
        match self.kind {
            ResourceType::Quote => present(&self.content),
            ResourceType::Video | ResourceType::Image | ResourceType::Pdf | ResourceType::Audio => {
                present(&self.url)
            }
        }
    }
}

/// Canonical biographical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub name: String,
    /// Portrait URL.
    #[serde(default)]
    pub image: String,
    pub title: String,
    pub personal_info: PersonalInfo,
    pub description: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub contributions: Vec<String>,
    #[serde(default)]
    pub thoughts: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceItem>,
    /// Soft references to other profiles; targets may be missing.
    #[serde(default)]
    pub related: Vec<ProfileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Missing or `null` in the dataset means no domain tags.
    #[serde(default, deserialize_with = "nullable_domains")]
    pub domains: Vec<Domain>,
}

impl ProfileRecord {
    /// Creates a record with the searchable fields set and everything else empty.
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        title: impl Into<String>,
        active_period: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            title: title.into(),
            personal_info: PersonalInfo {
                active_period: active_period.into(),
                ..PersonalInfo::default()
            },
            description: String::new(),
            timeline: Vec::new(),
            contributions: Vec::new(),
            thoughts: Vec::new(),
            resources: Vec::new(),
            related: Vec::new(),
            signature: None,
            domains: Vec::new(),
        }
    }

    /// Builder-style helper to attach domain tags.
    pub fn with_domains(mut self, domains: impl IntoIterator<Item = Domain>) -> Self {
        self.domains = domains.into_iter().collect();
        self
    }

    /// Returns whether the record carries `domain`.
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    /// Quote shown when this profile is featured.
    ///
    /// Uses the content of the first `quote` resource. When that content is
    /// missing or blank, falls back to the first thought.
    pub fn highlighted_quote(&self) -> Option<&str> {
        let from_resource = self
            .resources
            .iter()
            .find(|item| item.kind == ResourceType::Quote)
            .and_then(|item| item.content.as_deref())
            .filter(|content| !content.trim().is_empty());
        from_resource.or_else(|| self.thoughts.first().map(String::as_str))
    }

    /// Resources that carry enough data to render.
    pub fn displayable_resources(&self) -> impl Iterator<Item = &ResourceItem> {
        self.resources.iter().filter(|item| item.is_displayable())
    }
}

fn nullable_domains<'de, D>(deserializer: D) -> Result<Vec<Domain>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Domain>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{Domain, ProfileRecord, ResourceItem, ResourceType};

    #[test]
    fn domain_parse_accepts_wire_tags_only() {
        assert_eq!(Domain::parse(" quan_su "), Some(Domain::QuanSu));
        assert_eq!(Domain::parse("Quân sự"), None);
        assert_eq!(Domain::parse("all"), None);
    }

    #[test]
    fn coerce_falls_back_to_image() {
        assert_eq!(ResourceType::coerce("PDF"), ResourceType::Pdf);
        assert_eq!(ResourceType::coerce("document"), ResourceType::Image);
    }

    #[test]
    fn displayable_depends_on_kind() {
        let quote = ResourceItem {
            kind: ResourceType::Quote,
            content: None,
            url: Some("https://example.com".to_string()),
            source: None,
        };
        assert!(!quote.is_displayable());

        let video = ResourceItem {
            kind: ResourceType::Video,
            content: None,
            url: Some("https://example.com/v.mp4".to_string()),
            source: None,
        };
        assert!(video.is_displayable());

        let blank_audio = ResourceItem {
            kind: ResourceType::Audio,
            content: Some("speech".to_string()),
            url: Some("  ".to_string()),
            source: None,
        };
        assert!(!blank_audio.is_displayable());
    }

    fn quote(content: Option<&str>) -> ResourceItem {
        ResourceItem {
            kind: ResourceType::Quote,
            content: content.map(str::to_string),
            url: None,
            source: None,
        }
    }

    #[test]
    fn highlighted_quote_prefers_first_quote_resource() {
        let mut record = ProfileRecord::new(1, "Name", "Title", "1945-1969");
        record.thoughts = vec!["thought".to_string()];
        record.resources = vec![
            ResourceItem {
                kind: ResourceType::Image,
                content: Some("caption".to_string()),
                url: Some("https://example.com/a.jpg".to_string()),
                source: None,
            },
            quote(Some("first quote")),
            quote(Some("second quote")),
        ];
        assert_eq!(record.highlighted_quote(), Some("first quote"));
    }

    #[test]
    fn highlighted_quote_falls_back_to_first_thought() {
        let mut record = ProfileRecord::new(2, "Name", "Title", "1945-1969");
        record.thoughts = vec!["first thought".to_string(), "second".to_string()];
        assert_eq!(record.highlighted_quote(), Some("first thought"));

        record.resources = vec![quote(Some("  ")), quote(Some("later quote"))];
        assert_eq!(record.highlighted_quote(), Some("first thought"));
    }

    #[test]
    fn highlighted_quote_is_none_without_quotes_or_thoughts() {
        let mut record = ProfileRecord::new(3, "Name", "Title", "1945-1969");
        assert_eq!(record.highlighted_quote(), None);

        record.resources = vec![quote(None)];
        assert_eq!(record.highlighted_quote(), None);
    }
}
