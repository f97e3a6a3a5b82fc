//! Fetch error categorization for logging and user-facing messages.
//!
//! Backend calls return `anyhow::Error`; this module looks through the error
//! chain for the underlying `reqwest`/`serde_json` cause and sorts it into a
//! small set of categories. Catalog refreshes log the category, scoped views
//! show [`FetchErrorCategory::user_message`].

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorCategory {
    /// The request did not complete within the configured timeout
    Timeout { timeout: Option<Duration> },
    /// Connection refused, DNS failure and similar transport problems
    Network { message: String },
    /// The backend answered with a non-success status
    HttpStatus { status: u16 },
    /// The body did not match the expected response schema
    Decode { message: String },
    Other { message: String },
}

impl FetchErrorCategory {
    /// Returns true if repeating the request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchErrorCategory::Timeout { .. } | FetchErrorCategory::Network { .. } => true,
            FetchErrorCategory::HttpStatus { status } => *status >= 500 || *status == 429,
            FetchErrorCategory::Decode { .. } | FetchErrorCategory::Other { .. } => false,
        }
    }

    /// Message shown in place of a scoped view's data
    pub fn user_message(&self) -> String {
        match self {
            FetchErrorCategory::Timeout { timeout: Some(t) } => {
                format!("Request timed out after {} ms", t.as_millis())
            }
            FetchErrorCategory::Timeout { timeout: None } => "Request timed out".to_string(),
            FetchErrorCategory::Network { message } => format!("Network error: {}", message),
            FetchErrorCategory::HttpStatus { status } => {
                format!("Request failed with status code {}", status)
            }
            FetchErrorCategory::Decode { message } => {
                format!("Unexpected response from backend: {}", message)
            }
            FetchErrorCategory::Other { message } => message.clone(),
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            FetchErrorCategory::Timeout { .. } => "timeout",
            FetchErrorCategory::Network { .. } => "network",
            FetchErrorCategory::HttpStatus { .. } => "http",
            FetchErrorCategory::Decode { .. } => "decode",
            FetchErrorCategory::Other { .. } => "error",
        }
    }
}

/// Categorize a backend error. `timeout` is the client's configured timeout.
pub fn categorize_error(error: &anyhow::Error, timeout: Option<Duration>) -> FetchErrorCategory {
    for cause in error.chain() {
        if let Some(http) = cause.downcast_ref::<reqwest::Error>() {
            return categorize_reqwest(http, timeout);
        }
        if let Some(json) = cause.downcast_ref::<serde_json::Error>() {
            return FetchErrorCategory::Decode {
                message: truncate_message(&json.to_string(), 200),
            };
        }
    }

    FetchErrorCategory::Other {
        message: truncate_message(&format!("{:#}", error), 200),
    }
}

fn categorize_reqwest(error: &reqwest::Error, timeout: Option<Duration>) -> FetchErrorCategory {
    if error.is_timeout() {
        return FetchErrorCategory::Timeout { timeout };
    }
    if let Some(status) = error.status() {
        return FetchErrorCategory::HttpStatus {
            status: status.as_u16(),
        };
    }
    if error.is_decode() {
        return FetchErrorCategory::Decode {
            message: truncate_message(&error.to_string(), 200),
        };
    }
    if error.is_connect() || error.is_request() {
        return FetchErrorCategory::Network {
            message: truncate_message(&error.to_string(), 100),
        };
    }
    FetchErrorCategory::Other {
        message: truncate_message(&error.to_string(), 200),
    }
}

/// Truncate a message to max length, adding ellipsis if truncated
fn truncate_message(msg: &str, max_len: usize) -> String {
    if msg.chars().count() <= max_len {
        msg.to_string()
    } else {
        let kept: String = msg.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_found_in_the_chain() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = anyhow::Error::new(parse_error).context("decoding /api/tenant/all");

        let category = categorize_error(&error, None);

        assert!(matches!(category, FetchErrorCategory::Decode { .. }));
        assert!(!category.is_retryable());
    }

    #[test]
    fn test_unknown_errors_fall_back_to_other() {
        let error = anyhow::anyhow!("backend went away");
        let category = categorize_error(&error, None);
        assert_eq!(
            category,
            FetchErrorCategory::Other {
                message: "backend went away".to_string()
            }
        );
        assert_eq!(category.user_message(), "backend went away");
    }

    #[test]
    fn test_status_retryability() {
        assert!(FetchErrorCategory::HttpStatus { status: 503 }.is_retryable());
        assert!(FetchErrorCategory::HttpStatus { status: 429 }.is_retryable());
        assert!(!FetchErrorCategory::HttpStatus { status: 404 }.is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FetchErrorCategory::HttpStatus { status: 500 }.user_message(),
            "Request failed with status code 500"
        );
        assert_eq!(
            FetchErrorCategory::Timeout {
                timeout: Some(Duration::from_millis(5000))
            }
            .user_message(),
            "Request timed out after 5000 ms"
        );
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("abcdefghijkl", 8), "abcde...");
    }
}
