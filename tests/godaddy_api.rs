use gddnsd::dns::{Credentials, DnsProvider, GoDaddyClient};
use gddnsd::error::Error;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECORD_PATH: &str = "/domains/example.com/records/A/home";

fn client_for(server: &MockServer) -> GoDaddyClient {
    GoDaddyClient::with_api_base(
        &server.uri(),
        "home",
        "example.com",
        Credentials {
            api_key: "test_key".to_string(),
            api_secret: "test_secret".to_string(),
        },
    )
}

#[tokio::test]
async fn query_returns_first_record_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .and(header("Authorization", "sso-key test_key:test_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "data": "1.2.3.4", "name": "home", "ttl": 600, "type": "A" },
            { "data": "9.9.9.9", "name": "home", "ttl": 600, "type": "A" }
        ])))
        .mount(&server)
        .await;

    let published = client_for(&server).query().await.unwrap();
    assert_eq!(published.as_deref(), Some("1.2.3.4"));
}

#[tokio::test]
async fn query_empty_array_means_no_published_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let published = client_for(&server).query().await.unwrap();
    assert_eq!(published, None);
}

#[tokio::test]
async fn query_non_200_carries_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).query().await.unwrap_err();
    assert!(matches!(err, Error::Status(status) if status == StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn query_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).query().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn update_sends_expected_payload() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(RECORD_PATH))
        .and(header("Authorization", "sso-key test_key:test_secret"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([{
            "data": "5.6.7.8",
            "name": "home",
            "port": 1,
            "priority": 0,
            "protocol": "string",
            "service": "string",
            "ttl": 600,
            "type": "A",
            "weight": 0
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).update("5.6.7.8").await.unwrap();
}

#[tokio::test]
async fn update_non_200_carries_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).update("5.6.7.8").await.unwrap_err();
    assert!(matches!(err, Error::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn update_rejects_other_2xx_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server).update("5.6.7.8").await.unwrap_err();
    assert!(matches!(err, Error::Status(status) if status == StatusCode::NO_CONTENT));
}
