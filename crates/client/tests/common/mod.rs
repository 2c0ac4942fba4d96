//! In-process mock of the REST backend shared by the integration tests.
//!
//! Collections live in memory; every request is counted per
//! (method, table) so tests can assert exactly how many attempts the
//! client made. Tables can be told to fail their next N requests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::Mutex;
use url::Url;

use mostrador_client::{ApiClient, ClientConfig};

/// Shared state of the fake backend.
#[derive(Default)]
pub struct Backend {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    hits: Mutex<HashMap<String, usize>>,
    failures: Mutex<HashMap<String, usize>>,
}

impl Backend {
    /// Replace the contents of `table`.
    pub async fn seed(&self, table: &str, records: Vec<Value>) {
        self.collections.lock().await.insert(table.to_string(), records);
    }

    /// Make the next `remaining` requests to `table` answer 500.
    pub async fn fail_times(&self, table: &str, remaining: usize) {
        self.failures.lock().await.insert(table.to_string(), remaining);
    }

    /// Make every request to `table` answer 500.
    pub async fn fail_always(&self, table: &str) {
        self.fail_times(table, usize::MAX).await;
    }

    /// How many requests `table` has seen for `method`.
    pub async fn hits(&self, method: &str, table: &str) -> usize {
        self.hits
            .lock()
            .await
            .get(&format!("{method} {table}"))
            .copied()
            .unwrap_or(0)
    }

    /// Current contents of `table`.
    pub async fn records(&self, table: &str) -> Vec<Value> {
        self.collections.lock().await.get(table).cloned().unwrap_or_default()
    }

    async fn bump(&self, method: &str, table: &str) {
        *self
            .hits
            .lock()
            .await
            .entry(format!("{method} {table}"))
            .or_insert(0) += 1;
    }

    async fn should_fail(&self, table: &str) -> bool {
        let mut failures = self.failures.lock().await;
        match failures.get_mut(table) {
            None | Some(0) => false,
            Some(remaining) => {
                if *remaining != usize::MAX {
                    *remaining -= 1;
                }
                true
            }
        }
    }
}

type Shared = Arc<Backend>;

/// Start the mock backend on an ephemeral port and return a client
/// pointed at it.
pub async fn start(backend: Shared) -> ApiClient {
    let app = Router::new()
        .route("/{table}", get(list).post(create))
        .route("/{table}/{id}", put(replace).delete(remove))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    let base_url = Url::parse(&format!("http://{addr}")).expect("base url");
    ApiClient::new(&ClientConfig::new(base_url))
}

/// Route test logs through tracing; safe to call from every test.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mostrador_client=debug".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

async fn list(State(backend): State<Shared>, Path(table): Path<String>) -> Response {
    backend.bump("GET", &table).await;
    if backend.should_fail(&table).await {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    Json(backend.records(&table).await).into_response()
}

async fn create(
    State(backend): State<Shared>,
    Path(table): Path<String>,
    Json(items): Json<Vec<Value>>,
) -> Response {
    backend.bump("POST", &table).await;
    if backend.should_fail(&table).await {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    backend.collections.lock().await.insert(table, items.clone());
    Json(items).into_response()
}

async fn replace(
    State(backend): State<Shared>,
    Path((table, id)): Path<(String, String)>,
    Json(item): Json<Value>,
) -> Response {
    backend.bump("PUT", &table).await;
    if backend.should_fail(&table).await {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    let mut collections = backend.collections.lock().await;
    let Some(records) = collections.get_mut(&table) else {
        return (StatusCode::NOT_FOUND, "no such collection").into_response();
    };
    match records
        .iter_mut()
        .find(|record| record.get("id").and_then(Value::as_str) == Some(id.as_str()))
    {
        Some(slot) => {
            *slot = item.clone();
            Json(item).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no such record").into_response(),
    }
}

async fn remove(State(backend): State<Shared>, Path((table, id)): Path<(String, String)>) -> Response {
    backend.bump("DELETE", &table).await;
    if backend.should_fail(&table).await {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    let mut collections = backend.collections.lock().await;
    let Some(records) = collections.get_mut(&table) else {
        return (StatusCode::NOT_FOUND, "no such collection").into_response();
    };
    let before = records.len();
    records.retain(|record| record.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if records.len() == before {
        (StatusCode::NOT_FOUND, "no such record").into_response()
    } else {
        StatusCode::OK.into_response()
    }
}
