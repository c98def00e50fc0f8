//! Endpoint tests against a local mock server

use sa_client::{Error, SeekingAlphaClient};
use sa_core::Config;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SeekingAlphaClient {
  let config = Config { rate_limit: 600, ..Config::with_base_url(server.uri()) };
  SeekingAlphaClient::new(config).expect("Failed to create client")
}

fn calendar_page(rows: &[(&str, &str, &str)]) -> String {
  let body: String = rows
    .iter()
    .map(|(ticker, name, date)| {
      format!(
        r#"<tr data-exchange="NASDAQ"><td>{}</td><td>{}</td><td>{}</td></tr>"#,
        ticker, name, date
      )
    })
    .collect();
  format!("<html><body><table>{}</table></body></html>", body)
}

fn news_item(id: i64) -> serde_json::Value {
  json!({
    "id": id.to_string(),
    "type": "news",
    "attributes": {"publishOn": "2021-10-05T08:14:27-04:00", "title": format!("Headline {}", id)},
    "links": {"self": format!("/news/{}", id)}
  })
}

#[tokio::test]
async fn test_upcoming_earnings_walks_pages() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/earnings/earnings-calendar"))
    .respond_with(ResponseTemplate::new(200).set_body_string(calendar_page(&[
      ("AAPL", "Apple Inc.", "10/28/2021"),
      ("AMZN", "Amazon.com, Inc.", "10/28/2021"),
    ])))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/earnings/earnings-calendar/2"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(calendar_page(&[("XOM", "Exxon Mobil Corporation", "10/29/2021")])),
    )
    .expect(1)
    .mount(&server)
    .await;

  let records = client_for(&server).earnings().upcoming(2).await.unwrap();

  let tickers: Vec<_> = records.iter().filter_map(|r| r.ticker.as_deref()).collect();
  assert_eq!(tickers, vec!["AAPL", "AMZN", "XOM"]);
}

#[tokio::test]
async fn test_upstream_failure_is_reported() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/earnings/earnings-calendar"))
    .respond_with(ResponseTemplate::new(500))
    .mount(&server)
    .await;

  let result = client_for(&server).earnings().upcoming(1).await;
  assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_rate_limited_response() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/news/trending_news"))
    .respond_with(ResponseTemplate::new(429))
    .mount(&server)
    .await;

  let result = client_for(&server).news().trending(5).await;
  assert!(matches!(result, Err(Error::RateLimit(_))));
}

#[tokio::test]
async fn test_latest_pages_until_count_reached() {
  let server = MockServer::start().await;

  let first: Vec<_> = (1..=25).map(news_item).collect();
  let second: Vec<_> = (26..=50).map(news_item).collect();

  Mock::given(method("GET"))
    .and(path("/api/v3/news"))
    .and(query_param("page[number]", "1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": first })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/api/v3/news"))
    .and(query_param("page[number]", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": second })))
    .expect(1)
    .mount(&server)
    .await;

  let articles = client_for(&server).news().latest(None, 30).await.unwrap();

  // The whole second page is kept even though only 30 were asked for
  assert_eq!(articles.len(), 50);
  assert_eq!(articles[0].id(), 1);
  assert!(articles[0].url().ends_with("/news/1"));
}

#[tokio::test]
async fn test_latest_stops_on_empty_page() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/news"))
    .and(query_param("page[number]", "1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [news_item(1)] })))
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/api/v3/news"))
    .and(query_param("page[number]", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
    .mount(&server)
    .await;

  let articles = client_for(&server).news().latest(None, 10).await.unwrap();
  assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn test_trending_is_cut_to_count() {
  let server = MockServer::start().await;

  let items: Vec<_> = (1..=4)
    .map(|id| {
      json!({
        "id": id,
        "title": format!("Trending {}", id),
        "publishOn": "2021-10-05T08:14:27-04:00",
        "uri": format!("/news/{}", id)
      })
    })
    .collect();

  Mock::given(method("GET"))
    .and(path("/news/trending_news"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!(items)))
    .mount(&server)
    .await;

  let articles = client_for(&server).news().trending(2).await.unwrap();
  assert_eq!(articles.len(), 2);
  assert_eq!(articles[1].title(), "Trending 2");
  assert_eq!(articles[1].published_at(), "2021-10-05T08:14:27-04:00");
}

#[tokio::test]
async fn test_article_by_id() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/news/3745"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": {
        "id": "3745",
        "attributes": {
          "publishOn": "2021-10-05T08:14:27-04:00",
          "title": "Stocks rally",
          "content": "<p>Stocks rallied.</p><p>Bonds fell.</p>"
        },
        "links": {"self": "/news/3745-stocks-rally"}
      }
    })))
    .mount(&server)
    .await;

  let article = client_for(&server).news().article(3745).await.unwrap();
  assert_eq!(article.id(), 3745);
  assert_eq!(article.content(), "Stocks rallied.\nBonds fell.");
}

#[tokio::test]
async fn test_article_error_document() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/news/1"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"errors": [{"status": "404", "title": "Record not found"}]})),
    )
    .mount(&server)
    .await;

  let result = client_for(&server).news().article(1).await;
  assert!(matches!(result, Err(Error::Api(_))));
}
