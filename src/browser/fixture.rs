use anyhow::Result;
use chromiumoxide::page::Page;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use super::BrowserSession;
use crate::config::SessionConfig;

/// Await `body`, then run `teardown` exactly once, whatever the body did.
///
/// A body error takes precedence over a teardown error, which is only logged.
/// A panicking body is resumed after teardown has finished.
pub async fn guarded<T, B, D, DFut>(body: B, teardown: D) -> Result<T>
where
    B: Future<Output = Result<T>>,
    D: FnOnce() -> DFut,
    DFut: Future<Output = Result<()>>,
{
    let outcome = AssertUnwindSafe(body).catch_unwind().await;
    let released = teardown().await;

    match outcome {
        Err(panic) => {
            if let Err(e) = released {
                tracing::warn!("Teardown failed after panic: {:#}", e);
            }
            std::panic::resume_unwind(panic)
        }
        Ok(Err(body_err)) => {
            if let Err(e) = released {
                tracing::warn!("Teardown failed after error: {:#}", e);
            }
            Err(body_err)
        }
        Ok(Ok(value)) => {
            released?;
            Ok(value)
        }
    }
}

/// Launch a browser session, hand its page to `body`, and close the browser
/// once the body returns, fails or panics.
pub async fn with_page<T, F, Fut>(config: &SessionConfig, body: F) -> Result<T>
where
    F: FnOnce(Page) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let session = BrowserSession::launch(config).await?;
    let page = session.page().clone();
    guarded(body(page), move || session.close()).await
}
