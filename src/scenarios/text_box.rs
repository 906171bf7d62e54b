use anyhow::Result;
use std::time::Duration;

use crate::data::CONTACT;
use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::site::Route;

/// Fixed pause after scrolling the submit button into view.
const SUBMIT_SCROLL_SETTLE: Duration = Duration::from_millis(500);

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::TextBox).await?;

    page.fill("#userName", CONTACT.full_name).await?;
    page.fill("#userEmail", CONTACT.email).await?;
    page.fill("#currentAddress", CONTACT.current_address).await?;
    page.fill("#permanentAddress", CONTACT.permanent_address).await?;

    page.scroll_into_view("#submit", SUBMIT_SCROLL_SETTLE).await?;
    page.click("#submit").await?;

    expect(&page.locator(".border")).to_be_visible().await?;

    expect(&page.locator("#name")).to_contain_text(CONTACT.full_name).await?;
    expect(&page.locator("#email")).to_contain_text(CONTACT.email).await?;
    expect(&page.locator(".border #currentAddress"))
        .to_contain_text(CONTACT.current_address)
        .await?;
    expect(&page.locator(".border #permanentAddress"))
        .to_contain_text(CONTACT.permanent_address)
        .await?;

    Ok(())
}
