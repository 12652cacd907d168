mod common;

use axum::http::StatusCode;
use common::{API_KEY, MockApi, closed_base_url};
use pretty_assertions::assert_eq;
use remote_hr_mcp::{
    RemoteApiClient, RemoteError,
    api::{
        employments::Employment,
        timeoff::{
            ListTimeOffParams, ListTimeOffResponse, ListTimeOffTypesResponse, TimeOffStatus,
        },
    },
    http::Method,
};
use serde_json::{Value, json};

#[tokio::test]
async fn requests_carry_bearer_key_and_json_headers() {
    let mock = MockApi::replying(json!({ "timeoffs": [], "current_page": 1 })).await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let params = ListTimeOffParams {
        page: Some(1),
        page_size: Some(3),
        status: Some(TimeOffStatus::Approved),
        ..ListTimeOffParams::default()
    };
    let response: ListTimeOffResponse = client.list_time_off(&params).await.unwrap();
    assert_eq!(response.current_page, 1);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/timeoff");
    assert_eq!(request.query.as_deref(), Some("page=1&page_size=3&status=approved"));
    assert_eq!(request.authorization.as_deref(), Some("Bearer ra_test_12345"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn body_is_sent_as_json() {
    let mock = MockApi::replying(json!({ "ok": true })).await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let body = json!({ "cancel_reason": "plans changed" });
    let reply: Option<Value> = client
        .request(&["timeoff", "to-1", "cancel"], Method::POST, None, Some(&body))
        .await
        .unwrap();
    assert_eq!(reply, Some(json!({ "ok": true })));

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].query, None);
    assert_eq!(requests[0].body, Some(body));
}

#[tokio::test]
async fn no_content_yields_none() {
    let mock = MockApi::start(|_| (StatusCode::NO_CONTENT, None)).await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let reply: Option<Value> = client
        .request(
            &["timeoff", "to-1", "cancel-request", "approve"],
            Method::POST,
            None,
            None,
        )
        .await
        .unwrap();
    assert!(reply.is_none());

    let err = client
        .fetch::<Value>(&["timeoff", "types"], Method::GET, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::EmptyResponse(_)), "{err}");
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let mock = MockApi::start(|_| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(json!({ "message": "invalid employment" })),
        )
    })
    .await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let err = client
        .show_employment::<Employment>("emp-404")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    let message = err.to_string();
    assert!(message.starts_with("API Error: 422 Unprocessable Entity"), "{message}");
    assert!(message.contains("invalid employment"), "{message}");
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let mock = MockApi::start(|_| (StatusCode::INTERNAL_SERVER_ERROR, None)).await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let err = client
        .list_time_off_types::<ListTimeOffTypesResponse>()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
}

#[tokio::test]
async fn transport_failures_become_remote_errors() {
    let base_url = closed_base_url().await;
    let client = RemoteApiClient::new(API_KEY, Some(&base_url)).unwrap();

    let err = client
        .list_time_off_types::<ListTimeOffTypesResponse>()
        .await
        .unwrap_err();
    assert!(
        matches!(err, RemoteError::HttpMiddleware(_) | RemoteError::Http(_)),
        "{err}"
    );
}

#[tokio::test]
async fn path_ids_stay_inside_their_segment() {
    let mock = MockApi::replying(json!({ "data": { "expense": { "id": "x" } } })).await;
    let client = RemoteApiClient::new(API_KEY, Some(&mock.base_url)).unwrap();

    let _: Value = client.get_expense("x/../../employments/e1").await.unwrap();
    let _: Value = client.get_timesheet("ts-1?status=approved").await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/expenses/x%2F..%2F..%2Femployments%2Fe1");
    assert_eq!(requests[1].path, "/timesheets/ts-1%3Fstatus=approved");
    assert_eq!(requests[1].query, None);
}
