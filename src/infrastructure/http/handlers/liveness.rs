//! Liveness Handler
//!
//! 供外部 uptime 探测保持进程存活

use axum::http::StatusCode;

pub const ALIVE_BODY: &str = "Bot is alive";
pub const NOT_FOUND_BODY: &str = "Not Found";

/// `GET /`
pub async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE_BODY)
}

/// 其余路径与方法
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
