//! Request construction is repeatable, and models survive a JSON round trip
//! with their unknown properties intact.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde_json::json;
use sitekit::{HttpMethod, RequestConfiguration, RequestInformation, ReqwestAdapter};
use sitekit_sites::SitesServiceClient;
use sitekit_sites::models::{AnyWebPart, FieldValueSet, ListItem, Site, TextWebPart};
use sitekit_sites::sites::SiteItemRequestBuilderGetQueryParameters;

fn client() -> SitesServiceClient {
    let adapter = ReqwestAdapter::builder()
        .base_url("https://svc.example/v1")
        .build()
        .unwrap();
    SitesServiceClient::new(Arc::new(adapter))
}

fn timestamp(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

fn assert_same_request(first: &RequestInformation, second: &RequestInformation) {
    assert_eq!(first.method(), second.method());
    assert_eq!(first.resolve_url().unwrap(), second.resolve_url().unwrap());
    assert_eq!(first.headers(), second.headers());
    assert_eq!(first.content(), second.content());
}

// ============================================================================
// Repeatable request construction
// ============================================================================

#[test]
fn test_site_get_request_is_repeatable() {
    let site = client().sites().by_site_id("contoso.example,1,2");
    let config = || {
        Some(RequestConfiguration::with_query(SiteItemRequestBuilderGetQueryParameters {
            select: vec!["id".to_string(), "displayName".to_string()],
            ..Default::default()
        }))
    };

    let first = site.to_get_request_information(config()).unwrap();
    let second = site.to_get_request_information(config()).unwrap();

    assert_same_request(&first, &second);
    assert_eq!(first.method(), HttpMethod::Get);
    assert!(first.content().is_none());
    assert_eq!(first.headers().get_first("accept"), Some("application/json"));
}

#[test]
fn test_web_part_patch_request_is_repeatable() {
    let web_part = client()
        .sites()
        .by_site_id("s1")
        .pages()
        .by_base_site_page_id("p1")
        .graph_site_page()
        .canvas_layout()
        .vertical_section()
        .webparts()
        .by_web_part_id("w1");

    let mut text = TextWebPart::new();
    text.inner_html = Some("<p>hello</p>".to_string());
    let body = AnyWebPart::TextWebPart(text);

    let first = web_part.to_patch_request_information(&body, None).unwrap();
    let second = web_part.to_patch_request_information(&body, None).unwrap();

    assert_same_request(&first, &second);
    assert_eq!(first.method(), HttpMethod::Patch);
    assert_eq!(first.headers().get_first("content-type"), Some("application/json"));

    let sent: serde_json::Value = serde_json::from_slice(first.content().unwrap()).unwrap();
    assert_eq!(sent["@odata.type"], "#microsoft.graph.textWebPart");
    assert_eq!(sent["innerHtml"], "<p>hello</p>");
}

// ============================================================================
// Model round trips
// ============================================================================

#[test]
fn test_site_round_trip_keeps_unknown_properties() {
    let site = Site {
        id: Some("s1".to_string()),
        display_name: Some("Team Site".to_string()),
        created_date_time: Some(timestamp("2024-03-01T09:30:00+02:00")),
        additional_data: [("customFacet".to_string(), json!({"level": 3}))]
            .into_iter()
            .collect(),
        ..Site::default()
    };

    let encoded = serde_json::to_value(&site).unwrap();
    assert_eq!(encoded["displayName"], "Team Site");
    assert_eq!(encoded["customFacet"], json!({"level": 3}));

    let decoded: Site = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, site);
    assert_eq!(
        decoded.created_date_time.unwrap().offset().local_minus_utc(),
        2 * 3600
    );
}

#[test]
fn test_list_item_round_trip_keeps_field_values() {
    let decoded: ListItem = serde_json::from_value(json!({
        "id": "7",
        "lastModifiedDateTime": "2024-05-10T12:00:00Z",
        "fields": {"Title": "Quarterly report", "Pages": 12},
        "@microsoft.graph.tips": "extra"
    }))
    .unwrap();

    assert_eq!(
        decoded.last_modified_date_time,
        Some(timestamp("2024-05-10T12:00:00Z"))
    );
    let fields: &FieldValueSet = decoded.fields.as_deref().unwrap();
    assert_eq!(fields.additional_data["Title"], "Quarterly report");
    assert_eq!(decoded.additional_data["@microsoft.graph.tips"], "extra");

    let reencoded: ListItem = serde_json::from_value(serde_json::to_value(&decoded).unwrap()).unwrap();
    assert_eq!(reencoded, decoded);
}

#[test]
fn test_text_web_part_round_trip_keeps_variant() {
    let mut text = TextWebPart::new();
    text.id = Some("w1".to_string());
    text.inner_html = Some("<h2>News</h2>".to_string());
    text.additional_data
        .insert("layoutHint".to_string(), json!("wide"));
    let part = AnyWebPart::TextWebPart(text);

    let encoded = serde_json::to_value(&part).unwrap();
    assert_eq!(encoded["layoutHint"], "wide");

    let decoded: AnyWebPart = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, part);
    assert_eq!(decoded.odata_type(), Some("#microsoft.graph.textWebPart"));
}
