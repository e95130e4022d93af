//! Core types shared by the comet client and relay.

mod message;
mod theme;

pub use message::ContactMessage;
pub use theme::ColorTheme;
