use std::time::Duration;

use badger_lib::{Client, Error, ErrorsField, ListResponse};
use badger_lib::types::CheckIn;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("test-token:")
const BASIC_AUTH: &str = "Basic dGVzdC10b2tlbjo=";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .with_base_url(server.uri())
        .with_auth_token("test-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn sends_basic_auth_and_decodes_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/12345/check_ins"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("check_ins.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.check_ins().list(12345).await.unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].slug, "nightly-backup");
    assert_eq!(page.results[0].report_period.as_deref(), Some("1 day"));
    // numeric ids are accepted and kept as strings
    assert_eq!(page.results[1].id, "77");
    assert!(page.has_next_page());
    assert_eq!(
        page.next_page_url(),
        Some("https://app.honeybadger.io/v2/projects/12345/check_ins?page=2")
    );
}

#[tokio::test]
async fn string_error_becomes_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"errors": "Access denied"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).accounts().list().await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
    let api = err.as_api().unwrap();
    assert_eq!(api.message, "Access denied");
    assert_eq!(err.to_string(), "API error: HTTP 403: Access denied");
}

#[tokio::test]
async fn structured_errors_are_flattened() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/projects/1/environments"))
        .respond_with(ResponseTemplate::new(422).set_body_string(
            r#"{"errors": ["Name can't be blank", "Name is too short"]}"#,
        ))
        .mount(&mock_server)
        .await;

    let params = badger_lib::types::EnvironmentParams::default();
    let err = client_for(&mock_server)
        .environments()
        .create(1, &params)
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.status_code, 422);
    assert_eq!(api.message, "Name can't be blank, Name is too short");
    assert!(matches!(api.errors, Some(ErrorsField::Structured(_))));
}

#[tokio::test]
async fn html_error_page_falls_back_to_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/1/deploys/9"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .deployments()
        .get(1, 9)
        .await
        .unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status_code, 502);
    assert_eq!(api.message, "<html>Bad Gateway</html>");
    assert!(api.errors.is_none());
}

#[tokio::test]
async fn not_found_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .accounts()
        .get("missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.as_api().unwrap().message, "Not Found");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/1/check_ins"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).check_ins().list(1).await.unwrap_err();
    match err {
        Error::Decode { body, .. } => assert_eq!(body, "{not valid json}"),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn null_results_decode_as_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/1/check_ins"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"results": null, "links": {}}"#),
        )
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server).check_ins().list(1).await.unwrap();
    assert!(page.results.is_empty());
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn fetch_page_follows_next_link() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/v2/projects/1/check_ins?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/projects/1/check_ins"))
        .and(wiremock::matchers::query_param("page", "2"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"results": [{"id": "abc", "name": "Last", "slug": "last"}], "links": {}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page: ListResponse<CheckIn> = client.fetch_page(&next).await.unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "Last");
}

#[tokio::test]
async fn fetch_page_refuses_foreign_host() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .fetch_page::<CheckIn>("https://evil.example.com/v2/projects/1/check_ins?page=2")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Build(_)));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let client = Client::builder()
        .with_base_url("http://127.0.0.1:1")
        .with_auth_token("test-token")
        .build()
        .unwrap();

    let err = client.accounts().list().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn slow_server_hits_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"results": []}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .with_base_url(mock_server.uri())
        .with_auth_token("test-token")
        .with_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.accounts().list().await.unwrap_err();
    match err {
        Error::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/v2/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .with_base_url(format!("{}/proxy/", mock_server.uri()))
        .with_auth_token("test-token")
        .build()
        .unwrap();

    let page = client.accounts().list().await.unwrap();
    assert!(page.results.is_empty());
}
