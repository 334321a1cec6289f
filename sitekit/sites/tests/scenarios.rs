//! Request-building and dispatch through the generated builder tree,
//! against a wiremock server.

use std::sync::Arc;

use serde_json::json;
use sitekit::{
    BaseBearerTokenAuthenticationProvider, RequestConfiguration, RequestContext, ReqwestAdapter,
    SdkError, StaticTokenProvider,
};
use sitekit_sites::SitesServiceClient;
use sitekit_sites::analytics::ItemActivityStatsCountRequestBuilderGetQueryParameters;
use sitekit_sites::content_types::GetCompatibleHubContentTypesRequestBuilderGetQueryParameters;
use sitekit_sites::models::{AnyWebPart, Site, TextWebPart};
use sitekit_sites::sites::SiteItemRequestBuilderGetQueryParameters;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SitesServiceClient {
    let adapter = ReqwestAdapter::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    SitesServiceClient::new(Arc::new(adapter))
}

fn offline_client() -> SitesServiceClient {
    let adapter = ReqwestAdapter::builder()
        .base_url("https://svc.example/v1")
        .build()
        .unwrap();
    SitesServiceClient::new(Arc::new(adapter))
}

// ============================================================================
// Get a site by id
// ============================================================================

#[test]
fn test_site_get_request_information() {
    let query = SiteItemRequestBuilderGetQueryParameters {
        select: vec!["id".into(), "displayName".into()],
        ..Default::default()
    };
    let info = offline_client()
        .sites()
        .by_site_id("abc-123")
        .to_get_request_information(Some(RequestConfiguration::with_query(query)))
        .unwrap();

    assert_eq!(
        info.resolve_url().unwrap(),
        "https://svc.example/v1/sites/abc-123?%24select=id%2CdisplayName"
    );
    assert_eq!(info.method(), sitekit::HttpMethod::Get);
    assert_eq!(info.headers().get_first("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_site_get_decodes_site() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/abc-123"))
        .and(query_param("$select", "id,displayName"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "abc-123", "displayName": "Team"})),
        )
        .mount(&server)
        .await;

    let query = SiteItemRequestBuilderGetQueryParameters {
        select: vec!["id".into(), "displayName".into()],
        ..Default::default()
    };
    let site = client_for(&server)
        .sites()
        .by_site_id("abc-123")
        .get(&RequestContext::new(), Some(RequestConfiguration::with_query(query)))
        .await
        .unwrap()
        .expect("site body");

    assert_eq!(site.id.as_deref(), Some("abc-123"));
    assert_eq!(site.display_name.as_deref(), Some("Team"));
}

// ============================================================================
// Compatible hub content types
// ============================================================================

#[test]
fn test_compatible_hub_content_types_url() {
    let query = GetCompatibleHubContentTypesRequestBuilderGetQueryParameters {
        top: Some(10),
        count: Some(true),
        ..Default::default()
    };
    let info = offline_client()
        .sites()
        .by_site_id("s1")
        .content_types()
        .get_compatible_hub_content_types()
        .to_get_request_information(Some(RequestConfiguration::with_query(query)))
        .unwrap();

    assert_eq!(
        info.resolve_url().unwrap(),
        "https://svc.example/v1/sites/s1/contentTypes/getCompatibleHubContentTypes()?%24top=10&%24count=true"
    );
}

// ============================================================================
// Deep term store navigation
// ============================================================================

#[tokio::test]
async fn test_delete_term_relation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(
            "/sites/s1/termStore/groups/g1/sets/set1/terms/t1/children/t2/relations/r1",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .sites()
        .by_site_id("s1")
        .term_store()
        .groups()
        .by_group_id("g1")
        .sets()
        .by_set_id("set1")
        .terms()
        .by_term_id("t1")
        .children()
        .by_term_id1("t2")
        .relations()
        .by_relation_id("r1")
        .delete(&RequestContext::new(), None)
        .await;

    assert!(result.is_ok());
}

// ============================================================================
// Patch a web part
// ============================================================================

fn text_web_part() -> AnyWebPart {
    AnyWebPart::TextWebPart(TextWebPart {
        inner_html: Some("<p>hello</p>".into()),
        ..TextWebPart::new()
    })
}

#[tokio::test]
async fn test_patch_web_part_sends_json_body() {
    let server = MockServer::start().await;
    let expected = json!({
        "@odata.type": "#microsoft.graph.textWebPart",
        "innerHtml": "<p>hello</p>"
    });

    Mock::given(method("PATCH"))
        .and(path(
            "/sites/s1/pages/p1/graph.sitePage/canvasLayout/verticalSection/webparts/w1",
        ))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .sites()
        .by_site_id("s1")
        .pages()
        .by_base_site_page_id("p1")
        .graph_site_page()
        .canvas_layout()
        .vertical_section()
        .webparts()
        .by_web_part_id("w1")
        .patch(&RequestContext::new(), &text_web_part(), None)
        .await
        .unwrap()
        .expect("web part body");

    assert_eq!(updated, text_web_part());
    assert_eq!(updated.odata_type(), Some("#microsoft.graph.textWebPart"));
}

// ============================================================================
// Count
// ============================================================================

#[test]
fn test_count_request_information() {
    let query = ItemActivityStatsCountRequestBuilderGetQueryParameters {
        filter: Some("access gt 0".into()),
        ..Default::default()
    };
    let info = offline_client()
        .sites()
        .by_site_id("s1")
        .analytics()
        .item_activity_stats()
        .count()
        .to_get_request_information(Some(RequestConfiguration::with_query(query)))
        .unwrap();

    assert_eq!(
        info.resolve_url().unwrap(),
        "https://svc.example/v1/sites/s1/analytics/itemActivityStats/$count?%24filter=access+gt+0"
    );
    assert_eq!(info.headers().get_first("accept"), Some("text/plain;q=0.9"));
}

#[tokio::test]
async fn test_count_decodes_integer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/s1/analytics/itemActivityStats/$count"))
        .and(query_param("$filter", "access gt 0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("42", "text/plain"))
        .mount(&server)
        .await;

    let query = ItemActivityStatsCountRequestBuilderGetQueryParameters {
        filter: Some("access gt 0".into()),
        ..Default::default()
    };
    let count = client_for(&server)
        .sites()
        .by_site_id("s1")
        .analytics()
        .item_activity_stats()
        .count()
        .get(&RequestContext::new(), Some(RequestConfiguration::with_query(query)))
        .await
        .unwrap();

    assert_eq!(count, Some(42));
}

// ============================================================================
// Raw URL rehydration
// ============================================================================

#[tokio::test]
async fn test_next_link_is_followed_verbatim() {
    let server = MockServer::start().await;
    let next_link = format!("{}/sites?$skiptoken=page2", server.uri());

    Mock::given(method("GET"))
        .and(path("/sites"))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "s3"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": next_link,
            "value": [{"id": "s1"}, {"id": "s2"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = RequestContext::new();
    let first = client.sites().get(&ctx, None).await.unwrap().unwrap();
    assert_eq!(first.value.as_ref().map(Vec::len), Some(2));

    let link = first.odata_next_link.expect("next link");
    let second = client
        .sites()
        .with_url(link)
        .get(&ctx, None)
        .await
        .unwrap()
        .unwrap();

    let ids: Vec<_> = second
        .value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|site| site.id)
        .collect();
    assert_eq!(ids, vec!["s3"]);
}

#[test]
fn test_raw_url_ignores_query_configuration() {
    let raw = "https://svc.example/v1/sites?$skiptoken=abc";
    let query = sitekit_sites::sites::SitesRequestBuilderGetQueryParameters {
        top: Some(5),
        ..Default::default()
    };
    let info = offline_client()
        .sites()
        .with_url(raw)
        .to_get_request_information(Some(RequestConfiguration::with_query(query)))
        .unwrap();

    assert!(info.has_raw_url());
    assert_eq!(info.resolve_url().unwrap(), raw);
}

// ============================================================================
// Service error mapping
// ============================================================================

#[tokio::test]
async fn test_bad_request_maps_to_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/sites/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": "badRequest", "message": "bad id"}
        })))
        .mount(&server)
        .await;

    let body = Site {
        display_name: Some("Renamed".into()),
        ..Site::new()
    };
    let err = client_for(&server)
        .sites()
        .by_site_id("bad")
        .patch(&RequestContext::new(), &body, None)
        .await
        .unwrap_err();

    let service = err.as_service_error().expect("mapped service error");
    assert_eq!(service.status, 400);
    assert_eq!(service.code, "badRequest");
    assert_eq!(service.message, "bad id");
    assert!(matches!(err, SdkError::Service(_)));
}

#[tokio::test]
async fn test_error_details_and_inner_error_survive() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "itemNotFound",
                "message": "Item not found",
                "details": [{"code": "siteMissing", "message": "No such site", "target": "id"}],
                "innerError": {"request-id": "r-9", "client-request-id": "c-9"}
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .sites()
        .by_site_id("missing")
        .get(&RequestContext::new(), None)
        .await
        .unwrap_err();

    let service = err.as_service_error().expect("mapped service error");
    assert_eq!(service.status, 404);
    assert_eq!(service.details.len(), 1);
    assert_eq!(service.details[0].code, "siteMissing");
    assert_eq!(service.details[0].target.as_deref(), Some("id"));
    let inner = service.inner.as_ref().expect("inner error");
    assert_eq!(inner["request-id"], "r-9");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_bearer_token_reaches_service() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/s1"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s1"})))
        .mount(&server)
        .await;

    let adapter = ReqwestAdapter::builder()
        .base_url(server.uri())
        .authentication_provider(BaseBearerTokenAuthenticationProvider::new(
            StaticTokenProvider::new("secret"),
        ))
        .build()
        .unwrap();
    let client = SitesServiceClient::new(Arc::new(adapter));

    let site = client
        .sites()
        .by_site_id("s1")
        .get(&RequestContext::new(), None)
        .await
        .unwrap();
    assert_eq!(site.and_then(|s| s.id).as_deref(), Some("s1"));
}
