use anyhow::{Context, Result};

use crate::data::{UPLOAD_FILE_CONTENT, UPLOAD_FILE_NAME};
use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::site::Route;

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::UploadDownload).await?;

    // Removed when dropped, on success or failure
    let dir = tempfile::tempdir().context("Failed to create upload dir")?;
    let file = dir.path().join(UPLOAD_FILE_NAME);
    std::fs::write(&file, UPLOAD_FILE_CONTENT)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    page.locator("#uploadFile")
        .set_input_files(&[file.as_path()])
        .await?;

    let upload_result = page.locator("#uploadedFilePath");
    expect(&upload_result).to_be_visible().await?;
    expect(&upload_result).to_contain_text(UPLOAD_FILE_NAME).await?;

    dir.close().context("Failed to remove upload file")?;

    expect(&page.locator("#downloadButton")).to_be_visible().await?;

    Ok(())
}
