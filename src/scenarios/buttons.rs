use anyhow::Result;

use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::site::Route;

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::Buttons).await?;

    page.locator("#doubleClickBtn").dblclick().await?;
    let message = page.locator("#doubleClickMessage");
    expect(&message).to_be_visible().await?;
    expect(&message).to_have_text("You have done a double click").await?;

    page.locator("#rightClickBtn").right_click().await?;
    let message = page.locator("#rightClickMessage");
    expect(&message).to_be_visible().await?;
    expect(&message).to_have_text("You have done a right click").await?;

    page.click("//button[text()='Click Me']").await?;
    let message = page.locator("#dynamicClickMessage");
    expect(&message).to_be_visible().await?;
    expect(&message).to_have_text("You have done a dynamic click").await?;

    Ok(())
}
