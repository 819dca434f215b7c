use std::{
    future::IntoFuture,
    net::{IpAddr, SocketAddr},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::{DateTime, Utc};
use gapallet_models::lead::LeadResource;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

pub const SERVICE_NAME: &str = "G&A Pallet API";

pub async fn start_server(
    host: IpAddr,
    port: u16,
    fail_with: Option<StatusCode>,
) -> anyhow::Result<()> {
    let state = SharedState::default();
    state.lock().fail_with = fail_with;

    let listener = bind(host, port).await?;
    log_startup(listener.local_addr()?, fail_with);

    axum::serve(listener, router(state))
        .await
        .context("Failed to start HTTP server")
}

/// Start the mock backend in the background, e.g. on port `0` for tests.
///
/// The server is stopped when the returned handle is dropped.
pub async fn spawn(host: IpAddr, port: u16) -> anyhow::Result<RunningMockBackend> {
    let state = SharedState::default();

    let listener = bind(host, port).await?;
    let addr = listener
        .local_addr()
        .context("Failed to get local address")?;
    let base_url = Url::parse(&format!("http://{addr}"))
        .with_context(|| format!("Failed to build base url for {addr}"))?;
    log_startup(addr, None);

    let task = tokio::spawn(axum::serve(listener, router(state.clone())).into_future());

    Ok(RunningMockBackend {
        addr,
        base_url,
        state,
        task,
    })
}

async fn bind(host: IpAddr, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))
}

fn log_startup(addr: SocketAddr, fail_with: Option<StatusCode>) {
    info!("Starting mock backend on {addr}");
    for resource in LeadResource::ALL {
        info!("Lead endpoint: http://{addr}/api{resource}");
    }
    info!("Health endpoint: http://{addr}/api/health");
    if let Some(status) = fail_with {
        warn!("Every lead submission will be answered with {status}");
    }
}

pub struct RunningMockBackend {
    addr: SocketAddr,
    base_url: Url,
    state: SharedState,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningMockBackend {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Answer every following lead submission with `status` instead of
    /// storing it. `None` restores normal operation.
    pub fn fail_with(&self, status: Option<StatusCode>) {
        self.state.lock().fail_with = status;
    }

    /// Number of lead submissions received, including rejected ones.
    pub fn post_count(&self) -> usize {
        self.state.lock().received.len()
    }

    /// Raw JSON bodies of all submissions to `resource`, in arrival order.
    pub fn received(&self, resource: LeadResource) -> Vec<Value> {
        self.state
            .lock()
            .received
            .iter()
            .filter(|(r, _)| *r == resource)
            .map(|(_, body)| body.clone())
            .collect()
    }

    /// Contact requests the backend accepted and stored.
    pub fn contacts(&self) -> Vec<Value> {
        self.state.lock().contacts.clone()
    }

    /// Quote requests the backend accepted and stored.
    pub fn quotes(&self) -> Vec<Value> {
        self.state.lock().quotes.clone()
    }
}

impl Drop for RunningMockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug, Clone, Default)]
struct SharedState(Arc<Mutex<BackendState>>);

impl SharedState {
    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Default)]
struct BackendState {
    fail_with: Option<StatusCode>,
    received: Vec<(LeadResource, Value)>,
    contacts: Vec<Value>,
    quotes: Vec<Value>,
}

fn router(state: SharedState) -> Router<()> {
    Router::new()
        .route("/api/", routing::get(root))
        .route("/api/health", routing::get(health))
        .route(
            "/api/contact",
            routing::post(create_contact).get(list_contacts),
        )
        .route("/api/quote", routing::post(create_quote).get(list_quotes))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": SERVICE_NAME }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

#[derive(Debug, Serialize, Deserialize)]
struct ContactRequestCreate {
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct QuoteRequestCreate {
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    pallet_type: String,
    quantity: Option<i64>,
    dimensions: Option<String>,
    additional_info: Option<String>,
}

#[derive(Serialize)]
struct Stored<T> {
    id: Uuid,
    #[serde(flatten)]
    fields: T,
    created_at: DateTime<Utc>,
}

async fn create_contact(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    create::<ContactRequestCreate>(&state, LeadResource::Contact, payload)
}

async fn create_quote(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    create::<QuoteRequestCreate>(&state, LeadResource::Quote, payload)
}

fn create<T: Serialize + DeserializeOwned>(
    state: &SharedState,
    resource: LeadResource,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let mut state = state.lock();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            state.received.push((resource, Value::Null));
            return rejection.into_response();
        }
    };
    state.received.push((resource, body.clone()));

    if let Some(status) = state.fail_with {
        return error(status, "Forced failure");
    }

    let fields = match serde_json::from_value::<T>(body) {
        Ok(fields) => fields,
        Err(err) => return error(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()),
    };

    let stored = Stored {
        id: Uuid::new_v4(),
        fields,
        created_at: Utc::now(),
    };
    let stored = match serde_json::to_value(stored) {
        Ok(stored) => stored,
        Err(err) => return error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };

    match resource {
        LeadResource::Contact => state.contacts.push(stored.clone()),
        LeadResource::Quote => state.quotes.push(stored.clone()),
    }
    info!(%resource, "Stored lead");

    Json(stored).into_response()
}

async fn list_contacts(State(state): State<SharedState>) -> Json<Vec<Value>> {
    Json(state.lock().contacts.clone())
}

async fn list_quotes(State(state): State<SharedState>) -> Json<Vec<Value>> {
    Json(state.lock().quotes.clone())
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    async fn make_backend() -> (RunningMockBackend, reqwest::Client) {
        let backend = spawn(Ipv4Addr::LOCALHOST.into(), 0).await.unwrap();
        (backend, reqwest::Client::new())
    }

    #[tokio::test]
    async fn health_check() {
        let (backend, client) = make_backend().await;

        let response = client
            .get(backend.base_url().join("api/health").unwrap())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({ "status": "healthy", "service": SERVICE_NAME })
        );
    }

    #[tokio::test]
    async fn store_and_list_contact() {
        let (backend, client) = make_backend().await;
        let url = backend.base_url().join("api/contact").unwrap();
        let body = json!({
            "name": "Test User",
            "email": "test@example.com",
            "message": "This is a test message.",
        });

        let response = client.post(url.clone()).json(&body).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = response.json::<Value>().await.unwrap();
        assert_eq!(stored["name"], "Test User");
        assert_eq!(stored["phone"], Value::Null);
        assert!(stored["id"].is_string());
        assert!(stored["created_at"].is_string());

        let listed = client
            .get(url)
            .send()
            .await
            .unwrap()
            .json::<Vec<Value>>()
            .await
            .unwrap();
        assert_eq!(listed, [stored]);
        assert_eq!(backend.received(LeadResource::Contact), [body]);
        assert_eq!(backend.post_count(), 1);
    }

    #[tokio::test]
    async fn missing_required_fields() {
        let (backend, client) = make_backend().await;

        let response = client
            .post(backend.base_url().join("api/quote").unwrap())
            .json(&json!({ "name": "Test" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(backend.quotes().is_empty());
        assert_eq!(backend.post_count(), 1);
    }

    #[tokio::test]
    async fn forced_failure() {
        let (backend, client) = make_backend().await;
        backend.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));
        let body = json!({
            "name": "Test Customer",
            "email": "customer@example.com",
            "pallet_type": "Drum Pallet",
            "quantity": 12,
        });

        let response = client
            .post(backend.base_url().join("api/quote").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(backend.quotes().is_empty());
        assert_eq!(backend.received(LeadResource::Quote), [body]);
    }
}
