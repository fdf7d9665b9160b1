use serial_test::serial;
use std::env;
use worklog_sync::load_config::{load_config, JIRA_ISSUE_VAR, JIRA_TOKEN_VAR};

/// Both variables present produce a config with the endpoint built from the base URL.
#[test]
#[serial]
fn test_load_config_reads_env() {
    env::set_var(JIRA_ISSUE_VAR, "https://jira.example.com/rest/api/2/issue/");
    env::set_var(JIRA_TOKEN_VAR, "dXNlcjpzZWNyZXQ=");

    let config = load_config().expect("Config should load");

    assert_eq!(config.base_url, "https://jira.example.com/rest/api/2/issue/");
    assert_eq!(config.token, "dXNlcjpzZWNyZXQ=");
    assert_eq!(
        config.worklog_url("XXX-123"),
        "https://jira.example.com/rest/api/2/issue/XXX-123/worklog"
    );
    assert!(!format!("{config:?}").contains("dXNlcjpzZWNyZXQ="), "token must not be logged");
}

#[test]
#[serial]
fn test_load_config_errors_on_missing_token() {
    env::set_var(JIRA_ISSUE_VAR, "https://jira.example.com/rest/api/2/issue/");
    env::remove_var(JIRA_TOKEN_VAR);

    let msg = load_config().unwrap_err().to_string();
    assert!(msg.contains(JIRA_TOKEN_VAR), "Must name the missing var, got: {msg}");
}

#[test]
#[serial]
fn test_load_config_errors_on_empty_base_url() {
    env::set_var(JIRA_ISSUE_VAR, "  ");
    env::set_var(JIRA_TOKEN_VAR, "token");

    let msg = load_config().unwrap_err().to_string();
    assert!(msg.contains(JIRA_ISSUE_VAR), "Must name the empty var, got: {msg}");
}
