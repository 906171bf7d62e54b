pub mod click;
pub mod keyboard;
pub mod scroll;
pub mod state;
pub mod upload;
pub mod wait;

pub use click::{ClickOptions, MouseButton};
pub use state::ElementState;
pub use wait::WaitState;
