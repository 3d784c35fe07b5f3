//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod announce_handlers;
mod playback_controller;
mod voice_handlers;

pub use announce_handlers::*;
pub use playback_controller::*;
pub use voice_handlers::*;
