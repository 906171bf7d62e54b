use anyhow::Result;

use crate::expect::expect;
use crate::interaction::WaitState;
use crate::page::ScenarioPage;
use crate::site::Route;

/// Bootstrap's `text-danger` color, applied to `#colorChange` after a delay.
pub const DANGER_COLOR: &str = "rgb(220, 53, 69)";

fn color_changed_js() -> String {
    format!(
        r#"() => {{
            const button = document.querySelector('#colorChange');
            const style = window.getComputedStyle(button);
            return style.color === '{}';
        }}"#,
        DANGER_COLOR
    )
}

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::DynamicProperties).await?;

    let will_enable = page.locator("#enableAfter");
    expect(&will_enable).to_be_disabled().await?;

    page.wait_for_selector("#enableAfter:not([disabled])", WaitState::Visible)
        .await?;
    expect(&will_enable).to_be_enabled().await?;

    page.wait_for_function(&color_changed_js()).await?;

    let visible_after = page.locator("#visibleAfter");
    if !visible_after.is_visible().await? {
        visible_after.wait_for(WaitState::Visible).await?;
    }
    expect(&visible_after).to_be_visible().await?;

    Ok(())
}
