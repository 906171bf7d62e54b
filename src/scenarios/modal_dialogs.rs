use anyhow::Result;

use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::site::Route;

struct Modal {
    open: &'static str,
    close: &'static str,
    title: &'static str,
    body_excerpt: Option<&'static str>,
}

const SMALL: Modal = Modal {
    open: "#showSmallModal",
    close: "#closeSmallModal",
    title: "Small Modal",
    body_excerpt: Some("This is a small modal"),
};

const LARGE: Modal = Modal {
    open: "#showLargeModal",
    close: "#closeLargeModal",
    title: "Large Modal",
    body_excerpt: None,
};

async fn open_and_close(page: &ScenarioPage, modal: &Modal) -> Result<()> {
    page.click(modal.open).await?;

    let content = page.locator(".modal-content");
    expect(&content).to_be_visible().await?;
    expect(&page.locator(".modal-title")).to_have_text(modal.title).await?;
    if let Some(excerpt) = modal.body_excerpt {
        expect(&page.locator(".modal-body")).to_contain_text(excerpt).await?;
    }

    page.click(modal.close).await?;
    expect(&content).to_have_count(0).await
}

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::ModalDialogs).await?;

    open_and_close(page, &SMALL).await?;
    open_and_close(page, &LARGE).await?;

    Ok(())
}
