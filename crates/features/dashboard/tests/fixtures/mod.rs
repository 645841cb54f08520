#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use fmdash_dashboard::{ApiResponse, ConfigTransport, GatewayError, defaults};
use fmdash_domain::config::GatewayConfig;
use fmdash_domain::{ConfigurationDocument, Item};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// What a [`FakeTransport`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch,
    Save(ConfigurationDocument),
    Patch(String, Vec<Item>),
    Reset,
}

/// One scripted answer, optionally delivered late.
pub struct Step {
    pub delay: Duration,
    pub outcome: Result<ApiResponse, &'static str>,
}

impl Step {
    pub fn ok(data: Option<Value>) -> Self {
        Self { delay: Duration::ZERO, outcome: Ok(ApiResponse::ok(data)) }
    }

    pub fn refused(message: &str) -> Self {
        Self { delay: Duration::ZERO, outcome: Ok(ApiResponse::failed(message)) }
    }

    pub fn fail(error: &'static str) -> Self {
        Self { delay: Duration::ZERO, outcome: Err(error) }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Transport that replays a script in order and records every call.
#[derive(Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self { script: Mutex::new(script.into_iter().collect()), calls: Mutex::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn answer(&self, call: Call) -> Result<ApiResponse, GatewayError> {
        let step = {
            self.calls.lock().push(call);
            self.script.lock().pop_front()
        };
        let Some(step) = step else {
            return Err(GatewayError::from("script exhausted"));
        };
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.outcome.map_err(GatewayError::from)
    }
}

impl ConfigTransport for FakeTransport {
    async fn fetch(&self) -> Result<ApiResponse, GatewayError> {
        self.answer(Call::Fetch).await
    }

    async fn save(&self, document: &ConfigurationDocument) -> Result<ApiResponse, GatewayError> {
        self.answer(Call::Save(document.clone())).await
    }

    async fn patch_section(&self, section: &str, items: &[Item]) -> Result<ApiResponse, GatewayError> {
        self.answer(Call::Patch(section.to_owned(), items.to_vec())).await
    }

    async fn reset(&self) -> Result<ApiResponse, GatewayError> {
        self.answer(Call::Reset).await
    }
}

/// Small remote document that differs from the defaults.
pub fn remote_document() -> Value {
    json!({
        "sections": [
            {
                "name": "amc",
                "items": [
                    { "name": "statusOverview", "isVisible": true },
                    { "name": "typeDistribution", "isVisible": true },
                    { "name": "unitResourceDistribution", "isVisible": false }
                ]
            }
        ]
    })
}

// --- In-process backend ---

/// How the fake backend answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Healthy,
    ServerError,
    Garbage,
    Refuse,
}

pub struct BackendState {
    pub document: Value,
    pub mode: Mode,
    /// `METHOD path` of every request, in arrival order.
    pub requests: Vec<String>,
}

pub struct Backend {
    pub addr: SocketAddr,
    pub state: Arc<Mutex<BackendState>>,
}

impl Backend {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: format!("http://{}/api", self.addr),
            timeout_seconds: 5,
            ..GatewayConfig::default()
        }
    }

    pub fn set_mode(&self, mode: Mode) {
        self.state.lock().mode = mode;
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().requests.clone()
    }

    pub fn document(&self) -> Value {
        self.state.lock().document.clone()
    }
}

type Shared = Arc<Mutex<BackendState>>;

/// Serves the configuration endpoints under `/api` on an ephemeral local port.
pub async fn spawn_backend(document: Value) -> Backend {
    let state = Arc::new(Mutex::new(BackendState {
        document,
        mode: Mode::Healthy,
        requests: Vec::new(),
    }));

    let app = Router::new()
        .route("/api/dashboard/configuration", get(get_config).post(save_config))
        .route("/api/dashboard/configuration/section/{name}", patch(patch_section))
        .route("/api/dashboard/configuration/reset", post(reset_config))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Backend { addr, state }
}

fn reply(state: &mut BackendState, request: String, data: Option<Value>) -> Response {
    state.requests.push(request);
    match state.mode {
        Mode::Healthy => {
            let mut body = json!({ "success": true, "message": "ok" });
            if let Some(data) = data {
                body["data"] = data;
            }
            Json(body).into_response()
        },
        Mode::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Mode::Garbage => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        Mode::Refuse => Json(json!({ "success": false, "message": "read only" })).into_response(),
    }
}

async fn get_config(State(state): State<Shared>) -> Response {
    let mut state = state.lock();
    let document = state.document.clone();
    reply(&mut state, "GET /dashboard/configuration".into(), Some(document))
}

async fn save_config(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock();
    if state.mode == Mode::Healthy {
        state.document = body;
    }
    reply(&mut state, "POST /dashboard/configuration".into(), None)
}

async fn patch_section(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock();
    if state.mode == Mode::Healthy {
        let sections = state.document["sections"].as_array_mut().unwrap();
        match sections.iter_mut().find(|section| section["name"] == name.as_str()) {
            Some(section) => section["items"] = body["items"].clone(),
            None => sections.push(json!({ "name": name, "items": body["items"] })),
        }
    }
    reply(&mut state, format!("PATCH /dashboard/configuration/section/{name}"), None)
}

async fn reset_config(State(state): State<Shared>) -> Response {
    let mut state = state.lock();
    if state.mode == Mode::Healthy {
        state.document = serde_json::to_value(defaults::default_document()).unwrap();
    }
    let document = state.document.clone();
    reply(&mut state, "POST /dashboard/configuration/reset".into(), Some(document))
}
