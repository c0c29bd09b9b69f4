//! Error types for the provider crate.

use serde_json::Value;

/// Errors that can occur while asking the provider to place a call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The HTTP client could not be constructed.
    #[error("provider client initialization failed: {0}")]
    Init(String),

    /// The request never produced an HTTP response (DNS, connect, TLS, I/O).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    ///
    /// `body` holds the response when it parsed as JSON; otherwise the raw
    /// text is kept in `text` (if non-empty).
    #[error("provider returned HTTP {status}")]
    Rejected {
        status: u16,
        body: Option<Value>,
        text: Option<String>,
    },

    /// The provider answered with success but the body was not JSON.
    #[error("provider response could not be decoded: {reason}")]
    Decode { reason: String, text: String },
}

impl ProviderError {
    /// Build a [`ProviderError::Rejected`] from a status and raw response body.
    #[must_use]
    pub fn rejected(status: u16, raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(body) => Self::Rejected { status, body: Some(body), text: None },
            Err(_) => Self::Rejected {
                status,
                body: None,
                text: (!raw.is_empty()).then(|| raw.to_owned()),
            },
        }
    }

    /// Structured error body returned by the provider, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Rejected { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Raw response text returned by the provider, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Rejected { text, .. } => text.as_deref(),
            Self::Decode { text, .. } if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Most detailed description of the failure available.
    ///
    /// Checked in order: structured body, raw text, then the error message.
    #[must_use]
    pub fn details(&self) -> Value {
        if let Some(body) = self.body() {
            return body.clone();
        }
        if let Some(text) = self.text() {
            return Value::String(text.to_owned());
        }
        Value::String(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejected_with_json_body_prefers_body() {
        let err = ProviderError::rejected(400, r#"{"message":"invalid number"}"#);
        assert_eq!(err.details(), json!({"message": "invalid number"}));
        assert!(err.text().is_none(), "text must not be kept when body parsed");
    }

    #[test]
    fn rejected_with_plain_text_falls_back_to_text() {
        let err = ProviderError::rejected(502, "Bad Gateway");
        assert!(err.body().is_none());
        assert_eq!(err.details(), json!("Bad Gateway"));
    }

    #[test]
    fn rejected_with_empty_body_falls_back_to_message() {
        let err = ProviderError::rejected(503, "");
        assert_eq!(err.details(), json!("provider returned HTTP 503"));
    }

    #[test]
    fn body_wins_over_text_when_both_present() {
        let err = ProviderError::Rejected {
            status: 422,
            body: Some(json!({"error": "structured"})),
            text: Some("raw".to_owned()),
        };
        assert_eq!(err.details(), json!({"error": "structured"}));
    }

    #[test]
    fn transport_error_details_is_message() {
        let err = ProviderError::Transport("connection refused".to_owned());
        let details = err.details();
        let Some(s) = details.as_str() else {
            panic!("expected string details, got {details}");
        };
        assert!(s.contains("connection refused"), "got {s}");
    }
}
