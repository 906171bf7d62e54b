//! Auto-retrying assertions over a [`Locator`].
//!
//! Each assertion re-reads the element state until it matches or the
//! assertion timeout elapses, then fails with the last observed value.

use anyhow::Result;
use regex::Regex;
use std::time::Duration;

use crate::error::HarnessError;
use crate::interaction::ElementState;
use crate::locator::Locator;

const RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Expected text: exact after whitespace normalization, or a regex.
#[derive(Debug, Clone)]
pub enum TextMatcher {
    Exact(String),
    Pattern(Regex),
}

impl TextMatcher {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatcher::Exact(expected) => normalize_whitespace(actual) == normalize_whitespace(expected),
            TextMatcher::Pattern(re) => re.is_match(actual),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatcher::Exact(expected) => format!("{:?}", expected),
            TextMatcher::Pattern(re) => format!("/{}/", re.as_str()),
        }
    }
}

impl From<&str> for TextMatcher {
    fn from(value: &str) -> Self {
        TextMatcher::Exact(value.to_string())
    }
}

impl From<String> for TextMatcher {
    fn from(value: String) -> Self {
        TextMatcher::Exact(value)
    }
}

impl From<Regex> for TextMatcher {
    fn from(value: Regex) -> Self {
        TextMatcher::Pattern(value)
    }
}

/// Collapse runs of whitespace to one space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Start an assertion on `locator` using its configured assertion timeout.
pub fn expect(locator: &Locator) -> Expectation<'_> {
    Expectation {
        locator,
        timeout: locator.timeouts().expect,
        negated: false,
    }
}

pub struct Expectation<'a> {
    locator: &'a Locator,
    timeout: Duration,
    negated: bool,
}

impl<'a> Expectation<'a> {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Invert the next assertion.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub async fn to_be_visible(self) -> Result<()> {
        self.check(Check::Visible).await
    }

    pub async fn to_be_hidden(self) -> Result<()> {
        self.check(Check::Hidden).await
    }

    pub async fn to_be_enabled(self) -> Result<()> {
        self.check(Check::Enabled).await
    }

    pub async fn to_be_disabled(self) -> Result<()> {
        self.check(Check::Disabled).await
    }

    pub async fn to_have_text(self, expected: impl Into<TextMatcher>) -> Result<()> {
        self.check(Check::Text(expected.into())).await
    }

    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        self.check(Check::ContainsText(expected.to_string())).await
    }

    pub async fn to_have_value(self, expected: &str) -> Result<()> {
        self.check(Check::Value(expected.to_string())).await
    }

    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        self.check(Check::Count(expected)).await
    }

    async fn check(self, check: Check) -> Result<()> {
        let deadline = tokio::time::Instant::now() + self.timeout;
        loop {
            let state = self.locator.state().await?;
            if check.passes(&state) != self.negated {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(self.failure(&check, &state).into());
            }
            tokio::time::sleep(RETRY_INTERVAL).await;
        }
    }

    fn failure(&self, check: &Check, last: &ElementState) -> HarnessError {
        let prefix = if self.negated { "not " } else { "" };
        HarnessError::Assertion {
            selector: self.locator.selector().to_string(),
            expectation: format!("{}{} (within {}ms)", prefix, check.name(), self.timeout.as_millis()),
            expected: format!("{}{}", prefix, check.expected()),
            actual: check.actual(last),
        }
    }
}

/// One assertion kind. Pure over [`ElementState`] so it can be tested
/// without a browser.
#[derive(Debug, Clone)]
enum Check {
    Visible,
    Hidden,
    Enabled,
    Disabled,
    Text(TextMatcher),
    ContainsText(String),
    Value(String),
    Count(usize),
}

impl Check {
    fn passes(&self, state: &ElementState) -> bool {
        match self {
            Check::Visible => state.attached() && state.visible,
            Check::Hidden => !state.attached() || !state.visible,
            Check::Enabled => state.attached() && state.enabled,
            Check::Disabled => state.attached() && !state.enabled,
            Check::Text(matcher) => state.text.as_deref().is_some_and(|t| matcher.matches(t)),
            Check::ContainsText(expected) => state
                .text
                .as_deref()
                .is_some_and(|t| normalize_whitespace(t).contains(&normalize_whitespace(expected))),
            Check::Value(expected) => state.value.as_deref() == Some(expected.as_str()),
            Check::Count(expected) => state.count == *expected,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Check::Visible => "to be visible",
            Check::Hidden => "to be hidden",
            Check::Enabled => "to be enabled",
            Check::Disabled => "to be disabled",
            Check::Text(_) => "to have text",
            Check::ContainsText(_) => "to contain text",
            Check::Value(_) => "to have value",
            Check::Count(_) => "to have count",
        }
    }

    fn expected(&self) -> String {
        match self {
            Check::Visible => "visible".into(),
            Check::Hidden => "hidden".into(),
            Check::Enabled => "enabled".into(),
            Check::Disabled => "disabled".into(),
            Check::Text(matcher) => matcher.describe(),
            Check::ContainsText(expected) | Check::Value(expected) => format!("{:?}", expected),
            Check::Count(expected) => expected.to_string(),
        }
    }

    fn actual(&self, state: &ElementState) -> String {
        if !state.attached() && !matches!(self, Check::Count(_)) {
            return "<no matching element>".into();
        }
        match self {
            Check::Visible | Check::Hidden => {
                String::from(if state.visible { "visible" } else { "hidden" })
            }
            Check::Enabled | Check::Disabled => {
                String::from(if state.enabled { "enabled" } else { "disabled" })
            }
            Check::Text(_) | Check::ContainsText(_) => {
                format!("{:?}", normalize_whitespace(state.text.as_deref().unwrap_or("")))
            }
            Check::Value(_) => format!("{:?}", state.value.as_deref().unwrap_or("")),
            Check::Count(_) => state.count.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(text: &str) -> ElementState {
        ElementState {
            count: 1,
            visible: true,
            enabled: true,
            editable: false,
            text: Some(text.to_string()),
            value: None,
        }
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Name:\n\tJohn   Doe "), "Name: John Doe");
    }

    #[test]
    fn test_exact_text_ignores_layout_whitespace() {
        let check = Check::Text("You have done a double click".into());
        assert!(check.passes(&element("\n  You have done a  double click ")));
        assert!(!check.passes(&element("You have done a right click")));
    }

    #[test]
    fn test_regex_text() {
        let check = Check::Text(Regex::new(r"^Yes$").unwrap().into());
        assert!(check.passes(&element("Yes")));
        assert!(!check.passes(&element("Yes!")));
    }

    #[test]
    fn test_contains_text() {
        let check = Check::ContainsText("desktop".into());
        assert!(check.passes(&element("You have selected : desktop notes commands")));
        assert!(!check.passes(&ElementState::default()));
    }

    #[test]
    fn test_enabled_requires_element() {
        assert!(!Check::Enabled.passes(&ElementState::default()));
        assert!(!Check::Disabled.passes(&ElementState::default()));

        let disabled = ElementState {
            enabled: false,
            ..element("Will enable 5 seconds")
        };
        assert!(Check::Disabled.passes(&disabled));
        assert!(!Check::Enabled.passes(&disabled));
    }

    #[test]
    fn test_count_zero_matches_missing_element() {
        assert!(Check::Count(0).passes(&ElementState::default()));
        assert!(!Check::Count(0).passes(&element("michaeljohnson@example.com")));
        assert_eq!(Check::Count(0).actual(&element("x")), "1");
    }

    #[test]
    fn test_actual_for_missing_element() {
        assert_eq!(
            Check::Text("Yes".into()).actual(&ElementState::default()),
            "<no matching element>"
        );
    }

    #[test]
    fn test_hidden_passes_when_detached() {
        assert!(Check::Hidden.passes(&ElementState::default()));
        assert!(!Check::Hidden.passes(&element("Small Modal")));
    }
}
