pub mod browser;
pub mod config;
pub mod data;
pub mod error;
pub mod expect;
pub mod interaction;
pub mod locator;
pub mod navigation;
pub mod page;
pub mod runner;
pub mod scenarios;
pub mod selectors;
pub mod site;

pub use error::HarnessError;
pub use expect::expect;
pub use locator::Locator;
pub use page::ScenarioPage;
