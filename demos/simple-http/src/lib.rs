//! Minimal HTTP agent built on the Aegis SDK.
//!
//! Every GET renders a small status page (whether `API_KEY` is configured,
//! what the workspace root contains, the current time) and logs one
//! `request served` record.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use aegis_sdk::core::layout::WorkspaceLayout;
use aegis_sdk::core::record::format_ts;
use aegis_sdk::log::{LineSink, Logger};
use aegis_sdk::secrets::Secrets;
use aegis_sdk::workspace::Workspace;
use aegis_sdk::{Environment, ProcessEnv};
use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Html;
use axum::routing::get;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Secret reported (present or not) on the page. Its value is never shown.
pub const API_KEY_SECRET: &str = "API_KEY";

pub type SharedEnv = Arc<dyn Environment + Send + Sync>;
pub type SharedSink = Arc<dyn LineSink + Send + Sync>;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub workspace: Workspace<SharedEnv>,
    pub secrets: Secrets<SharedEnv>,
    pub logger: Logger<SharedSink, SharedSink>,
}

impl AppState {
    pub fn new(
        env: SharedEnv,
        layout: WorkspaceLayout,
        logger: Logger<SharedSink, SharedSink>,
    ) -> Self {
        Self {
            workspace: Workspace::with_layout(env.clone(), layout),
            secrets: Secrets::new(env),
            logger,
        }
    }

    /// State over the process environment, platform layout and stdio.
    pub fn from_env() -> Self {
        let stdout: SharedSink = Arc::new(std::io::stdout());
        let stderr: SharedSink = Arc::new(std::io::stderr());
        Self::new(
            Arc::new(ProcessEnv),
            WorkspaceLayout::default(),
            Logger::new(stdout, stderr),
        )
    }
}

/// Build the router. Any path answers GET.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/{*path}", get(serve_page))
        .with_state(state)
}

async fn serve_page(State(state): State<AppState>, method: Method, uri: Uri) -> Html<String> {
    let has_key = state
        .secrets
        .get(API_KEY_SECRET)
        .is_some_and(|value| !value.is_empty());
    let files = list_workspace(&state.workspace.resolve_root());
    let body = render_page(has_key, &files, Utc::now());

    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());
    if let Err(err) = state.logger.info(
        "request served",
        &[("path", path.into()), ("method", method.as_str().into())],
    ) {
        warn!(error = %err, "request log write failed");
    }

    Html(body)
}

/// Sorted entry names of `root`. Empty when it is missing or unreadable.
pub fn list_workspace(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Render the status page.
pub fn render_page(has_key: bool, files: &[String], now: DateTime<Utc>) -> String {
    let has_key = if has_key { "yes" } else { "no" };
    let files = if files.is_empty() {
        "(empty)".to_string()
    } else {
        files
            .iter()
            .map(|name| escape_html(name))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "<html>\n<body>\n<h1>AegisVM HTTP Server</h1>\n<p>API_KEY configured: {has_key}</p>\n<p>Workspace files: {files}</p>\n<p>Time: {}</p>\n</body>\n</html>",
        format_ts(now)
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
