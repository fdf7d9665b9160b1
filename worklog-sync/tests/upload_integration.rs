use mockito::Matcher;
use serde_json::json;
use worklog_core::config::WorklogConfig;
use worklog_core::contract::{RawRecord, Submitter, WorkLogEntry};
use worklog_core::parse::parse_records;
use worklog_core::synchronise::submit_worklog;
use worklog_sync::upload::JiraClient;

const TOKEN: &str = "dXNlcjpzZWNyZXQ=";

fn entries() -> Vec<WorkLogEntry> {
    parse_records(vec![
        RawRecord::new("", "27/01/16"),
        RawRecord::new("XXX-123 fix bug", "30"),
        RawRecord::new("XXX-456 review", "45"),
    ])
}

fn client_for(server: &mockito::ServerGuard) -> JiraClient {
    let base_url = format!("{}/rest/api/2/issue/", server.url());
    JiraClient::new(WorklogConfig::new(base_url, TOKEN))
}

#[tokio::test]
async fn posts_worklog_with_basic_auth_and_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/api/2/issue/XXX-123/worklog")
        .match_header("authorization", format!("Basic {TOKEN}").as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "started": "2016-01-27T18:00:00.201+0000",
            "timeSpent": "30m",
            "comment": "fix bug"
        })))
        .with_status(201)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.post_worklog(&entries()[0]).await;

    assert!(result.is_ok(), "expected success, got {:?}", result.err());
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/api/2/issue/XXX-123/worklog")
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.post_worklog(&entries()[0]).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("401"), "status expected in error, got: {msg}");
    assert!(msg.contains("Unauthorized"), "body expected in error, got: {msg}");
    mock.assert_async().await;
}

#[tokio::test]
async fn entry_without_issue_number_is_not_sent() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server);
    let entry = WorkLogEntry {
        issue_number: None,
        ..entries()[0].clone()
    };

    let err = client.post_worklog(&entry).await.unwrap_err();
    assert!(err.to_string().contains("no issue number"));
}

#[tokio::test]
async fn submits_every_entry_to_its_issue() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", "/rest/api/2/issue/XXX-123/worklog")
        .with_status(201)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/rest/api/2/issue/XXX-456/worklog")
        .match_body(Matcher::PartialJson(json!({ "timeSpent": "45m" })))
        .with_status(201)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut out = Vec::new();
    let report = submit_worklog(&client, &entries(), &mut out)
        .await
        .expect("submission should succeed");

    assert_eq!(report.transferred, 2);
    assert!(String::from_utf8(out).unwrap().contains("Transferred 2 entries."));
    first.assert_async().await;
    second.assert_async().await;
}
