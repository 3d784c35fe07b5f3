//! Discord 网关接入

mod client;
mod event_handler;

pub use client::{build_client, gateway_intents};
pub use event_handler::VoiceEventHandler;
