use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::sync::oneshot;

/// What the stub catalog answers to every subjects request.
#[derive(Clone, Debug)]
pub enum Stub {
    Json(serde_json::Value),
    Status(u16),
    Raw(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeenRequest {
    pub subject_file: String,
    pub limit: Option<String>,
}

struct StubState {
    stub: Stub,
    seen: Mutex<Vec<SeenRequest>>,
}

pub struct CatalogGuard {
    pub base_url: String,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CatalogGuard {
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Drop for CatalogGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

async fn subject(
    State(state): State<Arc<StubState>>,
    Path(subject_file): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Ok(mut seen) = state.seen.lock() {
        seen.push(SeenRequest {
            subject_file,
            limit: query.get("limit").cloned(),
        });
    }
    match &state.stub {
        Stub::Json(v) => axum::Json(v.clone()).into_response(),
        Stub::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Stub::Raw(body) => ([(header::CONTENT_TYPE, "application/json")], *body).into_response(),
    }
}

/// Serves `/subjects/:file` on an ephemeral port from a dedicated runtime
/// thread, so blocking clients can be used from the test thread.
pub fn spawn_catalog(stub: Stub) -> Result<CatalogGuard> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind stub listener")?;
    listener
        .set_nonblocking(true)
        .context("set stub listener nonblocking")?;
    let addr = listener.local_addr().context("stub local addr")?;

    let state = Arc::new(StubState {
        stub,
        seen: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/subjects/:file", get(subject))
        .with_state(state.clone());

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("build stub runtime")?;
    let (tx, rx) = oneshot::channel::<()>();
    let handle = thread::spawn(move || {
        rt.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(CatalogGuard {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
        handle: Some(handle),
    })
}

pub fn works_payload(n: usize) -> serde_json::Value {
    let works: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "key": format!("/works/OL{}W", i),
                "title": format!("Book {}", i),
                "edition_count": 3,
                "authors": [{"key": format!("/authors/OL{}A", i), "name": format!("Author {}", i)}],
            })
        })
        .collect();
    serde_json::json!({
        "key": "/subjects/science_fiction",
        "name": "science_fiction",
        "work_count": n,
        "works": works,
    })
}
