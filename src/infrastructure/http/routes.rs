//! HTTP Routes
//!
//! Endpoints:
//! - /      GET (HEAD)  存活探针，返回 "Bot is alive"
//! - 其它路径或方法      404 "Not Found"

use axum::{routing::get, Router};

use super::handlers;

/// 创建所有路由
pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(handlers::alive).fallback(handlers::not_found))
        .fallback(handlers::not_found)
}
