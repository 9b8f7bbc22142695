//! Integration tests for the HTTP transport against a mock server.

use serde_json::json;
use surveymonkey_api::rest::{CollectionResource, RestResource};
use surveymonkey_api::{
    AccessToken, BaseUrl, HttpClient, HttpError, HttpMethod, HttpRequest, RequestConfig,
    RequestOptions, ResourceError, SurveyMonkey, SurveyMonkeyConfig,
};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, tries: u32) -> SurveyMonkeyConfig {
    SurveyMonkeyConfig::builder()
        .access_token(AccessToken::new("T").unwrap())
        .base_url(BaseUrl::new(format!("{}/v3", server.uri())).unwrap())
        .tries(tries)
        .build()
        .unwrap()
}

fn get(url: String) -> HttpRequest {
    HttpRequest::merge(RequestConfig::new(url), RequestOptions::new())
}

#[tokio::test]
async fn test_successful_request_returns_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "sm_user"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config(&server, 1));
    let response = client
        .request(get(format!("{}/v3/users/me", server.uri())))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["username"], "sm_user");
}

#[tokio::test]
async fn test_error_body_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "id": "1020",
                "name": "Resource Not Found",
                "docs": "https://developer.surveymonkey.com/api/v3/#error-codes",
                "message": "There was an error retrieving the requested resource.",
                "http_status_code": 404
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config(&server, 3));
    let result = client
        .request(get(format!("{}/v3/surveys/404", server.uri())))
        .await;

    match result {
        Err(HttpError::Response(error)) => {
            assert_eq!(error.code, 404);
            assert_eq!(error.error_reference.as_deref(), Some("1020"));
            assert!(error.message.contains("Resource Not Found"));
            assert!(error.message.contains("1020"));
        }
        other => panic!("Expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_retried_until_tries_run_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(2)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config(&server, 2));
    let result = client
        .request(get(format!("{}/v3/surveys", server.uri())))
        .await;

    match result {
        Err(HttpError::MaxRetries(error)) => {
            assert_eq!(error.code, 429);
            assert_eq!(error.tries, 2);
        }
        other => panic!("Expected max retries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_try_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config(&server, 1));
    let result = client
        .request(get(format!("{}/v3/surveys", server.uri())))
        .await;

    assert!(matches!(result, Err(HttpError::Response(ref e)) if e.code == 429));
}

#[tokio::test]
async fn test_resource_request_reaches_server_with_headers_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys/42/collectors"))
        .and(header("Authorization", "Bearer T"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "7", "name": "Web Link 1"}],
            "per_page": 50,
            "page": 1,
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let response = api
        .surveys()
        .item("42")
        .collectors()
        .request(RequestOptions::new().query_param("per_page", "50"))
        .await
        .unwrap();

    assert_eq!(response.body["data"][0]["id"], "7");
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/users/me"))
        .and(header_exists("User-Agent"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let response = api.me().request(RequestOptions::new()).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/surveys/42/pages"))
        .and(body_json(json!({"title": "About you"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "9"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let response = api
        .survey("42")
        .pages()
        .request(
            RequestOptions::from(HttpMethod::Post).body(json!({"title": "About you"})),
        )
        .await
        .unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["id"], "9");
}

#[tokio::test]
async fn test_rejected_method_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let result = api
        .survey("42")
        .details()
        .request(RequestOptions::from(HttpMethod::Delete))
        .await;

    assert!(matches!(result, Err(ResourceError::MethodNotAllowed { .. })));
    assert!(result.unwrap_err().is_rejected_locally());
}

#[tokio::test]
async fn test_server_error_passes_through_resource_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/webhooks"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let error = api
        .webhooks()
        .request(RequestOptions::new())
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(503));
    assert!(!error.is_rejected_locally());
}

#[tokio::test]
async fn test_oversized_retry_after_falls_back_to_fixed_delay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1e30"))
        .expect(2)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config(&server, 2));
    let result = client
        .request(get(format!("{}/v3/surveys", server.uri())))
        .await;

    assert!(matches!(result, Err(HttpError::MaxRetries(ref e)) if e.tries == 2));
}

#[tokio::test]
async fn test_empty_success_body_reads_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/webhooks/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = SurveyMonkey::new(&config(&server, 1));
    let response = api
        .webhook("9")
        .request(RequestOptions::from(HttpMethod::Delete))
        .await
        .unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}
