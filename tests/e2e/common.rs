use bluegreen_core::config::Config;
use bluegreen_core::pool::Pool;
use bluegreen_server::{AppState, build_router};
use std::net::SocketAddr;

/// A pool instance served on an ephemeral localhost port.
pub struct RunningPool {
    pub addr: SocketAddr,
    pub state: AppState,
}

impl RunningPool {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

pub async fn spawn_pool(pool: Pool, release_id: Option<&str>) -> RunningPool {
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        ..Config::for_pool(pool)
    }
    .with_release_id(release_id);

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().unwrap();
    let router = build_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    RunningPool { addr, state }
}

/// GET `path` and return (status, body).
pub async fn get(client: &reqwest::Client, pool: &RunningPool, path: &str) -> (u16, String) {
    let resp = client
        .get(pool.url(path))
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    (status, resp.text().await.expect("failed to read body"))
}
