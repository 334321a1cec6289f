//! Function navigations, deprecated operations, binary content and
//! polymorphic models.

use std::sync::Arc;

use serde_json::json;
use sitekit::{RequestContext, ReqwestAdapter, SdkError, TemplateError};
use sitekit_sites::SitesServiceClient;
use sitekit_sites::models::{AnyBaseSitePage, AnyWebPart, DeltaResponse};
use wiremock::matchers::{body_bytes, header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: impl Into<String>) -> SitesServiceClient {
    let adapter = ReqwestAdapter::builder()
        .base_url(base_url)
        .build()
        .unwrap();
    SitesServiceClient::new(Arc::new(adapter))
}

// ============================================================================
// Function navigations
// ============================================================================

#[test]
fn test_get_by_path_binds_argument() {
    let info = client_for("https://svc.example/v1")
        .sites()
        .by_site_id("root")
        .get_by_path(Some("teams"))
        .to_get_request_information(None)
        .unwrap();

    assert_eq!(
        info.resolve_url().unwrap(),
        "https://svc.example/v1/sites/root/getByPath(path='teams')"
    );
}

#[tokio::test]
async fn test_missing_function_argument_fails_before_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .sites()
        .by_site_id("root")
        .get_by_path(None)
        .get(&RequestContext::new(), None)
        .await
        .unwrap_err();

    match err {
        SdkError::Template(TemplateError::MissingPathParameter { name, .. }) => {
            assert_eq!(name, "path");
        }
        other => panic!("expected a missing path parameter, got {other:?}"),
    }
}

#[test]
fn test_activities_by_interval_binds_all_arguments() {
    let info = client_for("https://svc.example/v1")
        .sites()
        .by_site_id("s1")
        .lists()
        .by_list_id("l1")
        .items()
        .by_list_item_id("i1")
        .get_activities_by_interval(Some("2024-01-01"), Some("2024-02-01"), Some("week"))
        .to_get_request_information(None)
        .unwrap();

    let url = info.resolve_url().unwrap();
    assert!(url.contains("startDateTime='2024-01-01'"), "{url}");
    assert!(url.contains("endDateTime='2024-02-01'"), "{url}");
    assert!(url.contains("interval='week'"), "{url}");
}

// ============================================================================
// Deprecated delta
// ============================================================================

#[test]
fn test_delta_url() {
    let info = client_for("https://svc.example/v1")
        .sites()
        .delta()
        .to_get_as_delta_get_response_request_information(None)
        .unwrap();

    assert_eq!(info.resolve_url().unwrap(), "https://svc.example/v1/sites/delta()");
}

#[tokio::test]
#[allow(deprecated)]
async fn test_deprecated_delta_get_delegates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/delta()"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.deltaLink": "https://svc.example/v1/sites/delta()?token=t1",
            "value": [{"id": "s1"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let delta = client_for(server.uri()).sites().delta();
    let ctx = RequestContext::new();

    let current = delta.get_as_delta_get_response(&ctx, None).await.unwrap().unwrap();
    let legacy: DeltaResponse = delta.get(&ctx, None).await.unwrap().unwrap();

    assert_eq!(legacy.odata_delta_link, current.odata_delta_link);
    assert_eq!(legacy.value, current.value);
}

// ============================================================================
// Binary content
// ============================================================================

#[tokio::test]
async fn test_drive_content_round_trip() {
    let server = MockServer::start().await;
    let payload = b"\x00\x01binary".to_vec();

    Mock::given(method("GET"))
        .and(path("/sites/s1/drive/root/content"))
        .and(headers("accept", vec!["application/octet-stream", "application/json"]))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload.clone(), "application/octet-stream"))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/sites/s1/drive/root/content"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_bytes(payload.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "item-1", "name": "file.bin"})))
        .mount(&server)
        .await;

    let content = client_for(server.uri()).sites().by_site_id("s1").drive().root().content();
    let ctx = RequestContext::new();

    let downloaded = content.get(&ctx, None).await.unwrap().unwrap();
    assert_eq!(downloaded.as_ref(), payload.as_slice());

    let item = content.put(&ctx, payload, None).await.unwrap().unwrap();
    assert_eq!(item.id.as_deref(), Some("item-1"));
}

#[tokio::test]
async fn test_empty_success_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/s1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let site = client_for(server.uri())
        .sites()
        .by_site_id("s1")
        .get(&RequestContext::new(), None)
        .await
        .unwrap();
    assert!(site.is_none());
}

// ============================================================================
// Polymorphic models
// ============================================================================

#[test]
fn test_web_part_discriminator_selects_variant() {
    let part: AnyWebPart = serde_json::from_value(json!({
        "@odata.type": "#microsoft.graph.textWebPart",
        "id": "w1",
        "innerHtml": "<p>x</p>"
    }))
    .unwrap();

    match part {
        AnyWebPart::TextWebPart(text) => {
            assert_eq!(text.id.as_deref(), Some("w1"));
            assert_eq!(text.inner_html.as_deref(), Some("<p>x</p>"));
        }
        other => panic!("expected a text web part, got {other:?}"),
    }
}

#[test]
fn test_unknown_discriminator_falls_back_to_base() {
    let page: AnyBaseSitePage = serde_json::from_value(json!({
        "@odata.type": "#microsoft.graph.somethingNew",
        "id": "p1"
    }))
    .unwrap();

    assert!(matches!(page, AnyBaseSitePage::BaseSitePage(_)));
    assert_eq!(page.odata_type(), Some("#microsoft.graph.somethingNew"));
}
