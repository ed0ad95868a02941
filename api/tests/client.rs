//! Integration tests for `StatsClient` against a mock statistics service.

use api::{ApiError, Month, StatsClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_row() -> serde_json::Value {
    json!({
        "id": 12,
        "title": "Wireless Mouse",
        "description": "2.4 GHz, USB receiver",
        "price": 329.99,
        "dateOfSale": "2021-11-27T20:29:54+05:30",
        "sold": true,
        "category": "electronics"
    })
}

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn transactions_sends_month_page_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("month", "June"))
        .and(query_param("page", "2"))
        .and(query_param("search", "head phones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = StatsClient::new(server.uri());
    let rows = client
        .transactions(Month::June, 2, "head phones")
        .await
        .expect("transactions fetch");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Wireless Mouse");
    assert_eq!(rows[0].date_of_sale, "2021-11-27T20:29:54+05:30");
}

#[tokio::test]
async fn search_is_sent_even_when_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("month", "March"))
        .and(query_param("page", "1"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = StatsClient::new(server.uri())
        .transactions(Month::March, 1, "")
        .await
        .expect("transactions fetch");

    assert!(rows.is_empty());
}

#[tokio::test]
async fn chart_endpoints_are_distinct() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pie-chart"))
        .and(query_param("month", "July"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"laptop":1,"phone":4,"accessory":2}"#.as_bytes(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Trailing slash on the base URL must not produce `//api/...` paths.
    let client = StatsClient::new(format!("{}/", server.uri()));
    let series = client.categories(Month::July).await.expect("pie fetch");

    assert_eq!(series.labels, vec!["laptop", "phone", "accessory"]);
    assert_eq!(series.values, vec![1.0, 4.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bar_chart_series_keeps_the_service_key_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bar-chart"))
        .and(query_param("month", "March"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"401-500":7,"0-100":2,"901-above":0}"#.as_bytes(), "application/json"),
        )
        .mount(&server)
        .await;

    let series = StatsClient::new(server.uri())
        .price_ranges(Month::March)
        .await
        .expect("bar fetch");

    assert_eq!(series.labels, vec!["401-500", "0-100", "901-above"]);
    assert_eq!(series.values, vec![7.0, 2.0, 0.0]);
}

#[tokio::test]
async fn statistics_decodes_partial_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .and(query_param("month", "November"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"totalSaleAmount": 23145.68, "soldItems": 5})),
        )
        .mount(&server)
        .await;

    let summary = StatsClient::new(server.uri())
        .statistics(Month::November)
        .await
        .expect("statistics fetch");

    assert_eq!(summary.total_sale_amount, Some(23145.68));
    assert_eq!(summary.sold_items, Some(5));
    assert_eq!(summary.not_sold_items, None);
}

#[tokio::test]
async fn transactions_body_must_be_the_row_array() {
    // A wrapped payload (the shape an object-envelope service would send) is
    // not part of the contract and must surface as a failure, not as rows.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"target": [sample_row()]})))
        .mount(&server)
        .await;

    let err = StatsClient::new(server.uri())
        .transactions(Month::March, 1, "")
        .await
        .expect_err("object bodies must not decode");

    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = StatsClient::new(server.uri())
        .statistics(Month::March)
        .await
        .expect_err("HTTP 500 must not decode");

    match err {
        ApiError::Status { endpoint, status } => {
            assert_eq!(endpoint, "/api/statistics");
            assert_eq!(status, 500);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}
