use serde::Serialize;

/// Terminal failures a scenario can hit. Every variant fails the scenario; none
/// is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Timed out after {timeout_ms}ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u64 },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Expected {selector} {expectation}\n  expected: {expected}\n  actual:   {actual}")]
    Assertion {
        selector: String,
        expectation: String,
        expected: String,
        actual: String,
    },

    #[error("Page script failed: {0}")]
    Script(String),
}

/// Coarse classification used in run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Launch,
    Navigation,
    Timeout,
    ElementNotFound,
    Assertion,
    Script,
    Other,
}

impl HarnessError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Launch(_) => FailureKind::Launch,
            Self::Navigation { .. } => FailureKind::Navigation,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::ElementNotFound { .. } => FailureKind::ElementNotFound,
            Self::Assertion { .. } => FailureKind::Assertion,
            Self::Script(_) => FailureKind::Script,
        }
    }
}

/// Find the first `HarnessError` in an error chain and classify it.
pub fn classify(err: &anyhow::Error) -> FailureKind {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<HarnessError>())
        .map(HarnessError::kind)
        .unwrap_or(FailureKind::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_assertion_message_shows_expected_and_actual() {
        let err = HarnessError::Assertion {
            selector: "#name".into(),
            expectation: "to have text".into(),
            expected: "\"John Doe\"".into(),
            actual: "\"Jane\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Expected #name to have text"));
        assert!(msg.contains("expected: \"John Doe\""));
        assert!(msg.contains("actual:   \"Jane\""));
    }

    #[test]
    fn test_classify_walks_context_chain() {
        let err = Err::<(), _>(HarnessError::Timeout {
            what: "#enableAfter".into(),
            timeout_ms: 100,
        })
        .context("step failed")
        .unwrap_err();
        assert_eq!(classify(&err), FailureKind::Timeout);
    }

    #[test]
    fn test_classify_unknown_error() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(classify(&err), FailureKind::Other);
    }
}
