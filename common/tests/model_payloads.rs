use chrono::NaiveDate;
use soiree_common::model::{
    BlogPost, ContactInquiry, Event, EventPatch, Faq, FaqPatch, GalleryItem, InquiryStatus,
    Service, ServicePatch,
};
use soiree_common::{Direction, Record, Resource, StatusTracked, ValidationError};
use serde_json::json;

#[test]
fn patch_sends_only_supplied_fields() {
    let patch = FaqPatch {
        answer: Some("Yes, within 50 km.".to_string()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "answer": "Yes, within 50 km." })
    );
}

#[test]
fn patch_can_clear_an_optional_column() {
    let patch = ServicePatch {
        icon: Some(None),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "icon": null }));
}

#[test]
fn draft_omits_unset_optional_fields() {
    let draft = GalleryItem::new("https://cdn.example/rose-arch.jpg");
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({ "image_url": "https://cdn.example/rose-arch.jpg" })
    );
}

#[test]
fn record_reads_store_row_and_ignores_unknown_columns() {
    let row = json!({
        "id": "8f14e45f-ceea-467f-a0e6-0e8b9c1a2b3c",
        "created_at": "2024-03-02T10:15:30.123456+00:00",
        "updated_at": "2024-03-05T08:00:00+00:00",
        "question": "Do you travel?",
        "answer": "Yes.",
        "category": null,
        "order_index": 2
    });
    let record: Record<Faq> = serde_json::from_value(row).unwrap();
    assert_eq!(record.id.as_str(), "8f14e45f-ceea-467f-a0e6-0e8b9c1a2b3c");
    assert_eq!(record.data.order_index, Some(2));
    assert_eq!(record.data.category, None);
    assert_eq!(record.created_at.timestamp(), 1_709_374_530);
}

#[test]
fn event_date_uses_calendar_day_format() {
    let event = Event::new("Harbor wedding", NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["date"], json!("2025-06-14"));

    let patch = EventPatch {
        date: NaiveDate::from_ymd_opt(2025, 7, 1),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "date": "2025-07-01" }));
}

#[test]
fn status_patch_carries_only_status() {
    let patch = ContactInquiry::status_patch(InquiryStatus::Resolved);
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "status": "resolved" })
    );
}

#[test]
fn tables_and_orderings_match_the_store_schema() {
    assert_eq!(Faq::TABLE, "faqs");
    assert_eq!(Faq::ORDER.column, "order_index");
    assert_eq!(Faq::ORDER.direction, Direction::Ascending);
    assert_eq!(Event::ORDER.column, "date");
    assert_eq!(Event::ORDER.direction, Direction::Ascending);
    assert_eq!(BlogPost::TABLE, "blogs");
    assert_eq!(BlogPost::ORDER.direction, Direction::Descending);
    assert_eq!(Service::ORDER.column, "created_at");
    assert!(Faq::STAMPS_UPDATED_AT);
    assert!(!Service::STAMPS_UPDATED_AT);
}

#[test]
fn validation_reports_first_blank_required_field() {
    assert_eq!(
        Faq::new("", "answer").validate(),
        Err(ValidationError::MissingField("question"))
    );
    assert_eq!(
        BlogPost::new("Title", " ").validate(),
        Err(ValidationError::MissingField("content"))
    );
    assert!(Service::new("Floral design").validate().is_ok());
}
