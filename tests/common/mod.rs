//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use metrics_exporter_prometheus::PrometheusHandle;
use model_router::config::RouterConfig;
use model_router::http::HttpServer;
use model_router::lifecycle::Shutdown;
use model_router::IntentRouter;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A router API running on an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_updates: mpsc::UnboundedSender<RouterConfig>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the HTTP API for `config` without a metrics recorder.
#[allow(dead_code)]
pub async fn start_server(config: RouterConfig) -> TestServer {
    start_server_with(config, None).await
}

/// Start the HTTP API for `config`, rendering `/metrics` from `metrics` when given.
#[allow(dead_code)]
pub async fn start_server_with(config: RouterConfig, metrics: Option<PrometheusHandle>) -> TestServer {
    let router = IntentRouter::new(&config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_updates, updates_rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(router, &config, metrics);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, updates_rx, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        config_updates,
    }
}

/// Write `content` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Client that ignores system proxies.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
