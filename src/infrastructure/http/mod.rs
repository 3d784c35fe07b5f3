//! HTTP Layer - 存活探针

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
