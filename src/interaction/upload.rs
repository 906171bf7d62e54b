use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::dom::SetFileInputFilesParams;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::page::Page;
use std::path::Path;

use crate::error::HarnessError;
use crate::selectors::Selector;

/// Populate a file input with local files. Chrome fires the input's
/// `input` and `change` events itself.
pub async fn set_input_files(page: &Page, selector: &Selector, files: &[&Path]) -> Result<()> {
    let mut paths = Vec::with_capacity(files.len());
    for file in files {
        let absolute = std::fs::canonicalize(file)
            .with_context(|| format!("Upload file not found: {}", file.display()))?;
        paths.push(absolute.to_string_lossy().into_owned());
    }

    // A remote object handle is needed, so the element is not returned by value.
    let params = EvaluateParams::builder()
        .expression(selector.first_js()?)
        .return_by_value(false)
        .build()
        .map_err(anyhow::Error::msg)?;

    let evaluated = page
        .execute(params)
        .await
        .with_context(|| format!("Failed to resolve file input {}", selector))?;

    let object_id = evaluated
        .result
        .result
        .object_id
        .clone()
        .ok_or_else(|| HarnessError::ElementNotFound {
            selector: selector.to_string(),
        })?;

    let mut set_files = SetFileInputFilesParams::new(paths.clone());
    set_files.object_id = Some(object_id);

    page.execute(set_files)
        .await
        .with_context(|| format!("Failed to set files on {}", selector))?;

    tracing::debug!("Set {} file(s) on {}: {:?}", paths.len(), selector, paths);
    Ok(())
}
