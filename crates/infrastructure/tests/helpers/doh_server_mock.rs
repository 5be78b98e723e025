#![allow(dead_code)]
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Canned reply served for every request.
#[derive(Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    queries: Arc<Mutex<Vec<String>>>,
}

/// Local stand-in for a DoH JSON resolver, listening on an ephemeral port.
pub struct MockDohServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            queries: queries.clone(),
        };
        let app = Router::new()
            .route("/resolve", get(resolve))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn resolve(State(state): State<MockState>, RawQuery(query): RawQuery) -> impl IntoResponse {
    state
        .queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());

    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.reply.status,
        [("content-type", "application/json")],
        state.reply.body.clone(),
    )
}

/// An address nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/resolve", addr)
}

/// Single-connection upstream that writes `head` and `body` verbatim.
///
/// With `hold_open` the socket stays open that long after writing; otherwise
/// it is closed straight away.
pub async fn raw_upstream_url(
    head: &'static str,
    body: &'static [u8],
    hold_open: Option<Duration>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(head.as_bytes()).await;
            let _ = stream.write_all(body).await;
            let _ = stream.flush().await;

            if let Some(delay) = hold_open {
                tokio::time::sleep(delay).await;
            }
        }
    });

    format!("http://{}/resolve", addr)
}
