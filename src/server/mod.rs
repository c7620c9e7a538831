//! HTTP surface
//!
//! | Route | Reply |
//! |-------|-------|
//! | `GET /news/:site` | 200 headline, or 500 error message |
//! | `GET /status` | 200 JSON object site → `{"latest": string or null}` |
//! | `POST /reset` | 200 `Reset` |
//! | `POST /stop` | 200 `Stopped`, then the listener shuts down |
//!
//! Every `/news` request gets its own Responder actor as the Model's reply
//! target; the handler returns once that Responder has finished.

use crate::clients::ModelClient;
use crate::model_actor::STOPPING;
use crate::responder_actor::{self, Reply};
use actor_framework::ActorClient;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{debug, error, info, warn};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub model: ModelClient,
    /// Notified by `POST /stop` once the Model has stopped.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(model: ModelClient) -> Self {
        Self {
            model,
            shutdown: Arc::new(Notify::new()),
        }
    }
}

/// Create the router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/news/:site", get(news))
        .route("/status", get(status))
        .route("/reset", post(reset))
        .route("/stop", post(stop))
        .with_state(state)
}

/// Serves until `POST /stop` or Ctrl-C, then drains in-flight requests.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let shutdown = Arc::clone(&state.shutdown);
    info!(addr = ?listener.local_addr().ok(), "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = shutdown.notified() => info!("Stop requested"),
                _ = tokio::signal::ctrl_c() => info!("Interrupted"),
            }
        })
        .await
}

fn is_site_name(site: &str) -> bool {
    !site.is_empty() && site.chars().all(|c| c.is_ascii_alphanumeric())
}

fn text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, body.into()).into_response()
}

async fn news(State(state): State<AppState>, Path(site): Path<String>) -> Response {
    if !is_site_name(&site) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let (responder, reply) = responder_actor::spawn();
    if state.model.latest_news(&site, responder.clone()).is_err() {
        responder.tell(Reply::Failure(STOPPING.to_string()));
    }
    responder.finished().await;

    match reply.await {
        Ok(Reply::Success(body)) => {
            debug!(%site, "News served");
            text(StatusCode::OK, body)
        }
        Ok(Reply::Failure(body)) => {
            warn!(%site, reason = body.trim_end(), "News request failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, body)
        }
        Err(_) => text(StatusCode::INTERNAL_SERVER_ERROR, STOPPING),
    }
}

async fn status(State(state): State<AppState>) -> Response {
    let snapshot = match state.model.status().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(error = %e, "Status failed");
            return text(StatusCode::INTERNAL_SERVER_ERROR, STOPPING);
        }
    };

    match to_pretty_json(&snapshot) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Status serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn reset(State(state): State<AppState>) -> Response {
    match state.model.reset().await {
        Ok(()) => text(StatusCode::OK, "Reset\n"),
        Err(e) => {
            error!(error = %e, "Reset failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, STOPPING)
        }
    }
}

async fn stop(State(state): State<AppState>) -> Response {
    info!("Stopping model");
    state.model.stop().await;
    state.shutdown.notify_one();
    text(StatusCode::OK, "Stopped\n")
}

/// JSON with 4-space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut body = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&body).into_owned())
}
