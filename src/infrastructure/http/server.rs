//! HTTP Server
//!
//! Axum 存活探针服务器启动和配置

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::liveness_logging_middleware;
use super::routes::create_routes;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
///
/// 先绑定端口再启动，绑定失败由调用方决定是否退出
pub struct HttpServer {
    listener: TcpListener,
}

impl HttpServer {
    /// 绑定监听地址
    pub async fn bind(config: &ServerConfig) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(config.addr()).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<std::net::SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// 构建 Router
    fn build_router() -> Router {
        create_routes()
            .layer(middleware::from_fn(liveness_logging_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        info!("Keep-alive server running on {}", self.listener.local_addr()?);

        axum::serve(self.listener, Self::build_router())
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:3000");
        assert_eq!(ServerConfig::new("127.0.0.1", 8080).addr(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_serves_liveness_over_tcp() {
        let server = HttpServer::bind(&ServerConfig::new("127.0.0.1", 0))
            .await
            .unwrap();
        let addr = server.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(server.run_with_shutdown(async {
            let _ = stop_rx.await;
        }));

        let body = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "Bot is alive");

        let response = reqwest::get(format!("http://{}/status", addr)).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);

        stop_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let first = HttpServer::bind(&ServerConfig::new("127.0.0.1", 0))
            .await
            .unwrap();
        let port = first.local_addr().unwrap().port();

        assert!(HttpServer::bind(&ServerConfig::new("127.0.0.1", port))
            .await
            .is_err());
    }
}
