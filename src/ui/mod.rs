pub mod style;
#[cfg(feature = "gtk")]
pub mod render;
#[cfg(feature = "gtk")]
pub mod widgets;

pub use style::{StyleTokens, LAYOUT_TOKENS};
#[cfg(feature = "gtk")]
pub use widgets::{action_button, icon_button};
