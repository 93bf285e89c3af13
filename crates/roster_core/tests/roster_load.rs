use roster_core::{Domain, ResourceType, Roster, RosterError};
use serde_json::json;
use std::io::Write;

fn dataset() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Hồ Chí Minh",
            "image": "https://example.com/hcm.jpg",
            "title": "Chủ tịch nước",
            "personal_info": {
                "birth": "19/05/1890",
                "death": "02/09/1969",
                "hometown": "Nghệ An",
                "active_period": "1911-1969",
                "party_membership": "1930"
            },
            "description": "Lãnh tụ.",
            "timeline": [
                { "year": "1911", "event": "Ra đi tìm đường cứu nước" },
                { "year": "1945", "event": "Đọc Tuyên ngôn Độc lập", "image": "https://example.com/1945.jpg" }
            ],
            "contributions": ["Sáng lập Đảng"],
            "thoughts": ["Không có gì quý hơn độc lập, tự do"],
            "resources": [
                { "type": "quote", "content": "Không có gì quý hơn độc lập, tự do", "source": "1966" },
                { "type": "poster", "url": "https://example.com/poster.jpg" },
                { "type": "pdf" }
            ],
            "related": [2, 99],
            "signature": "https://example.com/sig.png",
            "domains": ["chinh_tri", "tu_tuong"]
        },
        {
            "id": 2,
            "name": "Võ Nguyên Giáp",
            "title": "Đại tướng",
            "personal_info": {
                "birth": "25/08/1911",
                "death": "04/10/2013",
                "hometown": "Quảng Bình",
                "active_period": "1930-1980"
            },
            "description": "Tổng tư lệnh.",
            "timeline": [],
            "contributions": [],
            "thoughts": [],
            "resources": [],
            "related": [1],
            "domains": null
        }
    ])
}

#[test]
fn from_json_decodes_full_records() {
    let roster = Roster::from_json_str(&dataset().to_string()).unwrap();
    assert_eq!(roster.len(), 2);

    let hcm = roster.get(1).unwrap();
    assert_eq!(hcm.personal_info.party_membership, "1930");
    assert_eq!(hcm.timeline[1].image.as_deref(), Some("https://example.com/1945.jpg"));
    assert_eq!(hcm.domains, vec![Domain::ChinhTri, Domain::TuTuong]);
    assert_eq!(hcm.signature.as_deref(), Some("https://example.com/sig.png"));

    let giap = roster.get(2).unwrap();
    assert!(giap.domains.is_empty());
    assert!(giap.personal_info.party_membership.is_empty());
    assert!(giap.image.is_empty());
}

#[test]
fn unknown_resource_type_is_coerced_to_image() {
    let roster = Roster::from_json_str(&dataset().to_string()).unwrap();
    let kinds: Vec<_> = roster.get(1).unwrap().resources.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![ResourceType::Quote, ResourceType::Image, ResourceType::Pdf]
    );
}

#[test]
fn displayable_resources_skip_items_missing_payload() {
    let roster = Roster::from_json_str(&dataset().to_string()).unwrap();
    let shown: Vec<_> = roster
        .get(1)
        .unwrap()
        .displayable_resources()
        .map(|item| item.kind)
        .collect();
    assert_eq!(shown, vec![ResourceType::Quote, ResourceType::Image]);
}

#[test]
fn resource_kind_serializes_as_type_field() {
    let roster = Roster::from_json_str(&dataset().to_string()).unwrap();
    let value = serde_json::to_value(&roster.get(1).unwrap().resources[1]).unwrap();
    assert_eq!(value["type"], "image");
    assert!(value.get("content").is_none());
}

#[test]
fn related_resolution_skips_dangling_ids() {
    let roster = Roster::from_json_str(&dataset().to_string()).unwrap();
    let related: Vec<_> = roster.related(1, 3).into_iter().map(|r| r.id).collect();
    assert_eq!(related, vec![2]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut value = dataset();
    value[1]["id"] = json!(1);
    let err = Roster::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, RosterError::DuplicateId(1)));
}

#[test]
fn malformed_json_reports_json_error() {
    let err = Roster::from_json_str("{\"id\": 1}").unwrap_err();
    assert!(matches!(err, RosterError::Json(_)));
    assert!(err.to_string().starts_with("invalid roster data"));
}

#[test]
fn load_reads_dataset_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(dataset().to_string().as_bytes()).unwrap();

    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.records()[0].name, "Hồ Chí Minh");
}

#[test]
fn load_reports_missing_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = Roster::load(&missing).unwrap_err();
    match err {
        RosterError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bundled_sample_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/sample_roster.json");
    let roster = Roster::load(path).unwrap();
    assert_eq!(roster.len(), 4);
    let related: Vec<_> = roster.related(1, 3).into_iter().map(|r| r.id).collect();
    assert_eq!(related, vec![2, 3]);
}

#[test]
fn sample_dataset_highlights_quote_resource_then_thoughts() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/sample_roster.json");
    let roster = Roster::load(path).unwrap();
    assert_eq!(
        roster.get(1).unwrap().highlighted_quote(),
        Some("Không có gì quý hơn độc lập, tự do")
    );
    assert_eq!(roster.get(2).unwrap().highlighted_quote(), None);
}
