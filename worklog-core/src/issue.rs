//! Splits an activity label such as `XXX-123 fix bug` into a Jira issue
//! number and a description.

use std::sync::OnceLock;

use regex::Regex;

use crate::contract::Issue;

fn issue_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^([A-Z]{2,10}-[0-9]{1,5})(.*)$").expect("issue pattern is a valid regex")
    })
}

/// Parses a Jira issue number from the start of `text`.
///
/// An issue number is 2 to 10 capital letters, a hyphen and 1 to 5 digits,
/// e.g. `XXX-12345`. Anything after it becomes the trimmed description.
/// Without a match the number is `None` and the description is `text` as-is.
pub fn parse_issue(text: &str) -> Issue {
    match issue_pattern().captures(text) {
        Some(caps) => Issue {
            number: Some(caps[1].to_string()),
            description: caps[2].trim().to_string(),
        },
        None => Issue {
            number: None,
            description: text.to_string(),
        },
    }
}
