pub mod fixture;
pub mod launcher;
pub mod session;

pub use fixture::with_page;
pub use session::BrowserSession;
