use anyhow::Result;

use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::site::Route;

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::RadioButton).await?;

    page.click("//label[@for='yesRadio']").await?;

    let success_text = page.locator(".text-success");
    expect(&success_text).to_be_visible().await?;
    expect(&success_text).to_have_text("Yes").await?;

    page.click("//label[@for='impressiveRadio']").await?;

    expect(&success_text).to_be_visible().await?;
    expect(&success_text).to_have_text("Impressive").await?;

    let no_radio = page.locator("#noRadio");
    expect(&no_radio).to_be_disabled().await?;

    // The disabled option must not take the selection
    page.click("//label[@for='noRadio']").await?;
    expect(&success_text).to_have_text("Impressive").await?;
    expect(&page.locator("#impressiveRadio:checked")).to_have_count(1).await?;
    expect(&page.locator("#noRadio:checked")).to_have_count(0).await?;

    Ok(())
}
