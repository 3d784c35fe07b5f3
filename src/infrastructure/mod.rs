//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及 Discord 网关与存活探针

pub mod adapters;
pub mod discord;
pub mod http;
pub mod worker;

pub use discord::{build_client, VoiceEventHandler};
pub use http::{HttpServer, ServerConfig};
pub use worker::IdleWorker;
