//! Integration tests for `OrnamentsClient` detail fetches and caching.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auric_catalog::client::OrnamentsClient;
use auric_catalog::error::CatalogError;
use auric_core::{CurrencyCode, ProductId};
use auric_integration_tests::ornament;

fn test_client(base_url: &str) -> OrnamentsClient {
    OrnamentsClient::with_base_url(base_url, 5).expect("client construction")
}

#[tokio::test]
async fn get_ornament_parses_detail_and_sends_currency() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "ornament": ornament("orn_1", "Solitaire Ring", 45000) });
    Mock::given(method("GET"))
        .and(path("/ornaments/orn_1"))
        .and(query_param("currency", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client
        .get_ornament(&ProductId::new("orn_1"), CurrencyCode::USD)
        .await
        .expect("detail fetch");

    assert_eq!(product.id.as_str(), "orn_1");
    assert_eq!(product.name, "Solitaire Ring");
}

#[tokio::test]
async fn get_ornament_serves_repeat_lookups_from_cache() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "ornament": ornament("orn_1", "Solitaire Ring", 45000) });
    Mock::given(method("GET"))
        .and(path("/ornaments/orn_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let id = ProductId::new("orn_1");
    let first = client
        .get_ornament(&id, CurrencyCode::INR)
        .await
        .expect("first fetch");
    let second = client
        .get_ornament(&id, CurrencyCode::INR)
        .await
        .expect("cached fetch");

    assert_eq!(first, second);
}

#[tokio::test]
async fn get_ornament_cache_is_keyed_by_currency() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "ornament": ornament("orn_1", "Solitaire Ring", 45000) });
    Mock::given(method("GET"))
        .and(path("/ornaments/orn_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let id = ProductId::new("orn_1");
    client
        .get_ornament(&id, CurrencyCode::INR)
        .await
        .expect("INR fetch");
    client
        .get_ornament(&id, CurrencyCode::USD)
        .await
        .expect("USD fetch");
}

#[tokio::test]
async fn get_ornament_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ornaments/orn_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_ornament(&ProductId::new("orn_missing"), CurrencyCode::INR)
        .await
        .expect_err("missing id should fail");

    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn malformed_body_surfaces_as_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ornaments/orn_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_ornament(&ProductId::new("orn_1"), CurrencyCode::INR)
        .await
        .expect_err("bad body should fail");

    assert!(matches!(err, CatalogError::Parse(_)));
}
