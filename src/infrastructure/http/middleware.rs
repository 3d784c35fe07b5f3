//! HTTP Middleware
//!
//! 存活探针访问日志
//!
//! uptime 服务每隔几秒探测一次 `/`，扫描器会打到任意路径，
//! 这两类请求都不应该刷满 info / warn 日志。

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::Level;

/// 按路径和状态码决定日志级别
pub fn access_log_level(path: &str, status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status == StatusCode::NOT_FOUND {
        Level::DEBUG
    } else if status.is_client_error() {
        Level::WARN
    } else if path == "/" {
        Level::TRACE
    } else {
        Level::DEBUG
    }
}

/// 存活探针访问日志中间件
pub async fn liveness_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    let level = access_log_level(&path, status);
    let code = status.as_u16();
    if level == Level::ERROR {
        tracing::error!(method = %method, path = %path, status = code, "HTTP server error");
    } else if level == Level::WARN {
        tracing::warn!(method = %method, path = %path, status = code, "HTTP client error");
    } else if level == Level::DEBUG {
        tracing::debug!(method = %method, path = %path, status = code, "HTTP request");
    } else {
        tracing::trace!(method = %method, path = %path, status = code, "Liveness check");
    }

    response
}
