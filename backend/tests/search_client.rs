use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use backend::{api::search::SearchApiClient, config::SearchApiConfig};
use common::{
    search_error::SearchApiError,
    search_filters::{ArrayFilterKey, FilterSet, RangeFilterKey},
    search_query::SearchRequest,
};
use serde_json::{Value, json};


#[derive(Clone)]
enum Reply {
    Found,
    Status(StatusCode),
    Garbage,
    Slow(Duration),
}

#[derive(Clone)]
struct MockService {
    reply: Reply,
    received: Arc<Mutex<Vec<Value>>>,
}

fn ndq_payload() -> Value {
    json!({
        "results": [{
            "symbol": "NDQ",
            "display_name": "Nasdaq 100 ETF",
            "kind": "etf",
            "inception_date": "2015-05-26",
            "currency": "AUD",
            "domicile": "AU",
            "exchange": "ASX",
            "one_year_return": "21.3",
            "five_year_return": "18.1",
            "asset_classes": [],
            "categories": [],
            "asset_categories": ["International Equities"],
            "trailing_12m_dividend_yield": null,
            "forward_12m_dividend_yield": null,
            "is_flagship_fund": true,
            "flagship_description_short": null,
            "flagship_image_url": null,
            "discoverable_tags": [],
            "classification": null,
            "sub_classification": null,
            "issuer": "Betashares",
            "fund_size": "6500",
            "management_fee": "0.48",
            "dividend_frequency": null,
            "investment_suitability": null,
            "management_approach": "Passive",
            "sector": null,
            "market_capitalisation": null,
            "pe_ratio_ttm": null,
            "total_assets": null,
            "total_revenue": null,
            "quick_ratio": null,
            "current_ratio": null,
            "price_to_book_ratio": null
        }],
        "count": 1,
        "indexed_at": 1717000000000_i64
    })
}

async fn handle_search(State(service): State<MockService>, Json(body): Json<Value>) -> axum::response::Response {
    service.received.lock().unwrap().push(body);
    match service.reply {
        Reply::Found => Json(ndq_payload()).into_response(),
        Reply::Status(status) => (status, "search backend unavailable").into_response(),
        Reply::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        Reply::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(ndq_payload()).into_response()
        }
    }
}

/// Starts a fake search service and returns a client pointed at it.
async fn start_mock(reply: Reply) -> (SearchApiClient, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let service = MockService { reply, received: received.clone() };
    let app = Router::new().route("/search", post(handle_search)).with_state(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = SearchApiConfig::from_url(&format!("http://{addr}/search")).unwrap();
    (SearchApiClient::new(config), received)
}

#[tokio::test]
async fn posts_json_body_and_decodes_results() {
    let (client, received) = start_mock(Reply::Found).await;
    let filters = FilterSet::new()
        .with_values(ArrayFilterKey::Kind, ["etf"])
        .with_range(RangeFilterKey::FundSize, Some("100"), None);
    let request = SearchRequest::for_page("NDQ", &filters, "fund_size.desc", 2);

    let response = client.search(&request).await.unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].symbol, "NDQ");
    assert_eq!(response.indexed_at, 1_717_000_000_000);

    let received = received.lock().unwrap();
    assert_eq!(
        received.as_slice(),
        [json!({
            "search_text": "NDQ",
            "from": 2,
            "size": 15,
            "order_by": "fund_size.desc",
            "kind": ["etf"],
            "fund_size": {"min": "100"},
        })]
    );
}

#[tokio::test]
async fn server_error_carries_status() {
    let (client, _) = start_mock(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let request = SearchRequest::for_page("", &FilterSet::new(), "", 1);

    let error = client.search(&request).await.unwrap_err();
    assert_eq!(error, SearchApiError::Http { status: 500 });
    assert!(!error.is_cancelled());
}

#[tokio::test]
async fn client_errors_are_failures_too() {
    let (client, _) = start_mock(Reply::Status(StatusCode::BAD_REQUEST)).await;
    let request = SearchRequest::for_suggestions("x");

    let error = client.search(&request).await.unwrap_err();
    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let (client, _) = start_mock(Reply::Garbage).await;
    let request = SearchRequest::for_suggestions("x");

    let error = client.search(&request).await.unwrap_err();
    assert!(matches!(error, SearchApiError::Decode { .. }), "{error:?}");
}

#[tokio::test]
async fn dropping_the_call_abandons_a_slow_request() {
    let (client, _) = start_mock(Reply::Slow(Duration::from_secs(30))).await;
    let request = SearchRequest::for_page("slow", &FilterSet::new(), "", 1);

    let started = std::time::Instant::now();
    let outcome = tokio::time::timeout(Duration::from_millis(50), client.search(&request)).await;
    assert!(outcome.is_err(), "slow search should still be pending");
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = SearchApiConfig::from_url(&format!("http://{addr}/search")).unwrap();
    let client = SearchApiClient::new(config);
    let error = client
        .search(&SearchRequest::for_suggestions("x"))
        .await
        .unwrap_err();
    assert!(matches!(error, SearchApiError::Network { .. }), "{error:?}");
}
