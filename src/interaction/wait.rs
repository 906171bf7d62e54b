use anyhow::Result;
use chromiumoxide::cdp::js_protocol::runtime::ExceptionDetails;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use std::future::Future;
use std::time::Duration;

use super::state::{self, ElementState};
use crate::error::HarnessError;
use crate::selectors::Selector;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Element condition to wait for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaitState {
    Attached,
    Detached,
    #[default]
    Visible,
    Hidden,
    /// Visible and not disabled.
    Enabled,
    /// Visible, enabled and accepting text input.
    Editable,
}

impl WaitState {
    pub fn is_satisfied(self, state: &ElementState) -> bool {
        match self {
            WaitState::Attached => state.attached(),
            WaitState::Detached => !state.attached(),
            WaitState::Visible => state.attached() && state.visible,
            WaitState::Hidden => !state.attached() || !state.visible,
            WaitState::Enabled => state.attached() && state.visible && state.enabled,
            WaitState::Editable => state.attached() && state.visible && state.editable,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaitState::Attached => "attached",
            WaitState::Detached => "detached",
            WaitState::Visible => "visible",
            WaitState::Hidden => "hidden",
            WaitState::Enabled => "enabled",
            WaitState::Editable => "editable",
        }
    }
}

/// Poll `check` until it yields `Some`, or fail with a timeout naming `what`.
/// Errors from `check` end the wait immediately.
pub async fn poll_until<T, F, Fut>(what: &str, timeout: Duration, mut check: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if let Some(value) = check().await? {
            return Ok(value);
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(HarnessError::Timeout {
                what: what.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            }
            .into());
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Wait until `selector` reaches `wait_state`.
pub async fn wait_for_selector(
    page: &Page,
    selector: &Selector,
    wait_state: WaitState,
    timeout: Duration,
) -> Result<ElementState> {
    tracing::debug!("Waiting for {} to be {}", selector, wait_state.name());
    let what = format!("{} to be {}", selector, wait_state.name());
    poll_until(&what, timeout, move || async move {
        let current = state::probe(page, selector).await?;
        Ok(wait_state.is_satisfied(&current).then_some(current))
    })
    .await
}

/// Wait until the JS function `predicate` returns a truthy value.
///
/// `predicate` is function source such as `() => document.title === 'x'`.
/// Runtime exceptions thrown while the page is still settling count as falsy;
/// a syntax error or any protocol failure ends the wait with a script error.
pub async fn wait_for_function(page: &Page, predicate: &str, timeout: Duration) -> Result<()> {
    let predicate = predicate.trim();
    let js = format!("(() => !!({})())()", predicate);
    let js = js.as_str();
    let what = format!("{} to return a truthy value", predicate);
    poll_until(&what, timeout, move || async move {
        let evaluated = match page.evaluate(js).await {
            Ok(result) => result.into_value::<bool>().map_err(CdpError::from),
            Err(e) => Err(e),
        };
        predicate_outcome(predicate, evaluated)
    })
    .await
}

/// Map one evaluation of a wait predicate to "done", "not yet" or a failure.
fn predicate_outcome(predicate: &str, evaluated: Result<bool, CdpError>) -> Result<Option<()>> {
    match evaluated {
        Ok(truthy) => Ok(truthy.then_some(())),
        Err(CdpError::JavascriptException(details)) if !is_syntax_error(&details) => {
            tracing::trace!("wait_for_function predicate threw: {}", details.text);
            Ok(None)
        }
        Err(e) => Err(HarnessError::Script(format!("evaluating {}: {}", predicate, e)).into()),
    }
}

fn is_syntax_error(details: &ExceptionDetails) -> bool {
    details
        .exception
        .as_ref()
        .and_then(|exception| exception.class_name.as_deref())
        == Some("SyntaxError")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> ElementState {
        ElementState {
            count: 1,
            visible: true,
            enabled: true,
            editable: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_wait_states() {
        let gone = ElementState::default();
        let hidden = ElementState {
            visible: false,
            ..visible()
        };

        assert!(WaitState::Visible.is_satisfied(&visible()));
        assert!(!WaitState::Visible.is_satisfied(&hidden));
        assert!(WaitState::Hidden.is_satisfied(&hidden));
        assert!(WaitState::Hidden.is_satisfied(&gone));
        assert!(WaitState::Attached.is_satisfied(&hidden));
        assert!(WaitState::Detached.is_satisfied(&gone));
        assert!(!WaitState::Detached.is_satisfied(&visible()));
    }

    #[test]
    fn test_disabled_and_readonly_block_actions() {
        let disabled = ElementState {
            enabled: false,
            editable: false,
            ..visible()
        };
        let readonly = ElementState {
            editable: false,
            ..visible()
        };

        assert!(WaitState::Enabled.is_satisfied(&visible()));
        assert!(!WaitState::Enabled.is_satisfied(&disabled));
        assert!(WaitState::Enabled.is_satisfied(&readonly));
        assert!(WaitState::Editable.is_satisfied(&visible()));
        assert!(!WaitState::Editable.is_satisfied(&disabled));
        assert!(!WaitState::Editable.is_satisfied(&readonly));
        assert!(!WaitState::Editable.is_satisfied(&ElementState::default()));
    }

    fn js_exception(class_name: &str) -> CdpError {
        let details: ExceptionDetails = serde_json::from_value(serde_json::json!({
            "exceptionId": 1,
            "text": "Uncaught",
            "lineNumber": 0,
            "columnNumber": 0,
            "exception": { "type": "object", "className": class_name }
        }))
        .unwrap();
        CdpError::JavascriptException(Box::new(details))
    }

    #[test]
    fn test_predicate_runtime_exception_is_not_yet() {
        let outcome = predicate_outcome("() => el.style", Err(js_exception("TypeError")));
        assert_eq!(outcome.unwrap(), None);
        assert_eq!(predicate_outcome("() => true", Ok(true)).unwrap(), Some(()));
        assert_eq!(predicate_outcome("() => false", Ok(false)).unwrap(), None);
    }

    #[test]
    fn test_predicate_syntax_error_is_script_failure() {
        let err = predicate_outcome("() => {", Err(js_exception("SyntaxError"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HarnessError>(),
            Some(HarnessError::Script(message)) if message.contains("() => {")
        ));
    }

    #[tokio::test]
    async fn test_protocol_error_ends_function_wait_immediately() {
        let started = tokio::time::Instant::now();
        let err = poll_until::<(), _, _>("() => ready", Duration::from_secs(30), || async {
            predicate_outcome("() => ready", Err(CdpError::NoResponse))
        })
        .await
        .unwrap_err();

        assert_eq!(crate::error::classify(&err), crate::error::FailureKind::Script);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_poll_until_returns_first_success() {
        let mut calls = 0;
        let value = poll_until("counter", Duration::from_secs(5), || {
            calls += 1;
            let ready = calls >= 3;
            async move { Ok(ready.then_some(calls)) }
        })
        .await
        .unwrap();
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_poll_until_times_out() {
        let err = poll_until::<(), _, _>("never", Duration::from_millis(150), || async {
            Ok(None)
        })
        .await
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<HarnessError>(),
            Some(&HarnessError::Timeout {
                what: "never".into(),
                timeout_ms: 150
            })
        );
    }

    #[tokio::test]
    async fn test_poll_until_propagates_errors() {
        let err = poll_until::<(), _, _>("broken", Duration::from_secs(5), || async {
            Err(anyhow::anyhow!("page crashed"))
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "page crashed");
    }
}
