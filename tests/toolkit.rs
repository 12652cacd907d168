mod common;

use common::{API_KEY, MockApi};
use pretty_assertions::assert_eq;
use remote_hr_mcp::{RemoteApiToolkit, RemoteError, ToolkitOptions};
use serde_json::{Value, json};

#[test]
fn every_tool_is_exposed_without_an_allow_list() {
    let toolkit = RemoteApiToolkit::new(ToolkitOptions::new(API_KEY)).unwrap();
    assert_eq!(toolkit.tools().len(), 30);
    assert_eq!(toolkit.tools()[0].name(), "List Time Off");
}

#[test]
fn unmatched_allow_list_yields_no_tools() {
    let toolkit = RemoteApiToolkit::new(
        ToolkitOptions::new(API_KEY).with_allowed_tools(["Delete Time Off"]),
    )
    .unwrap();
    assert!(toolkit.tools().is_empty());
}

#[tokio::test]
async fn invoke_returns_json_text() {
    let mock = MockApi::replying(json!({
        "current_page": 1,
        "incentives": [{ "id": "inc-1", "amount": 50000, "type": "one_time" }],
        "total_count": 1,
        "total_pages": 1
    }))
    .await;
    let toolkit = RemoteApiToolkit::new(mock.options()).unwrap();

    let text = toolkit
        .tool("List Incentives")
        .unwrap()
        .invoke(json!({ "employment_id": "emp-1", "type": "one_time" }))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["incentives"][0]["amount"], 50000);

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/incentives");
    let mut pairs: Vec<_> = requests[0].query.as_deref().unwrap().split('&').collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec!["employment_id=emp-1", "type=one_time"]);
}

#[tokio::test]
async fn invoke_rejects_invalid_arguments() {
    let mock = MockApi::replying(json!({})).await;
    let toolkit = RemoteApiToolkit::new(mock.options()).unwrap();

    let err = toolkit
        .tool("Create Expense")
        .unwrap()
        .invoke(json!({ "title": "Taxi" }))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::InvalidParams(_)), "{err}");
    assert!(mock.requests().is_empty());
}
