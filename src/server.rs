//! Server-rendered front-end.
//!
//! Each request to `/wrapped` builds a fresh [`Controller`], runs one submit
//! and renders the controller's state as HTML. The card is embedded as a PNG
//! data URI so the browser can save it directly.

use crate::card::{RasterCanvas, CARD_HEIGHT, CARD_WIDTH};
use crate::client::AnalysisClient;
use crate::controller::{Controller, Phase, DOWNLOAD_FILE_NAME};
use crate::error::Result;
use crate::font::FontBook;
use crate::list::escape_html;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use base64::Engine;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared, read-only server state.
pub struct AppState {
    client: AnalysisClient,
    fonts: Option<FontBook>,
}

impl AppState {
    pub fn new(client: AnalysisClient, fonts: Option<FontBook>) -> Self {
        Self { client, fonts }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/wrapped", get(wrapped_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Form fields submitted from the page.
#[derive(Debug, Default, Deserialize)]
pub struct WrappedQuery {
    #[serde(default)]
    identifier: String,
    #[serde(default)]
    backend: String,
}

async fn index_handler() -> Html<String> {
    Html(Page::default().render())
}

async fn wrapped_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WrappedQuery>,
) -> (StatusCode, Html<String>) {
    info!(identifier = %query.identifier, backend = %query.backend, "Wrapped request");

    let mut page = Page {
        identifier: query.identifier.clone(),
        backend: query.backend.clone(),
        ..Default::default()
    };

    let canvas = match RasterCanvas::new(CARD_WIDTH, CARD_HEIGHT, state.fonts.clone()) {
        Ok(canvas) => canvas,
        Err(e) => {
            error!(error = %e, "Canvas setup failed");
            page.error = Some(e.to_string());
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(page.render()));
        }
    };

    let mut controller = Controller::new(state.client.clone(), canvas);
    controller.form.identifier = query.identifier;
    controller.form.backend_url = query.backend;

    let status = match controller.submit().await {
        Err(e) => {
            page.alert = controller.alert().map(str::to_string).or(Some(e.to_string()));
            StatusCode::BAD_REQUEST
        }
        Ok(Phase::Success) => match result_section(&controller) {
            Ok(section) => {
                page.result = Some(section);
                StatusCode::OK
            }
            Err(e) => {
                error!(error = %e, "Card export failed");
                page.error = Some(e.to_string());
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
        Ok(_) => {
            page.error = controller.error_message().map(str::to_string);
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Html(page.render()))
}

fn result_section<A>(controller: &Controller<A, RasterCanvas>) -> Result<String> {
    let png = controller.card_png()?;
    let card = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    );
    let view = controller.view();
    let words = view.words.to_html("top-words");
    let verbs = view.verbs.to_html("top-verbs");
    let topics = view.topics.to_html("topics");
    let share = escape_html(view.share_link.as_deref().unwrap_or_default());

    Ok(format!(
        r#"<div id="result">
  <div class="columns">
    <section><h2>Top words</h2>{words}</section>
    <section><h2>Top verbs</h2>{verbs}</section>
    <section><h2>Topics</h2>{topics}</section>
  </div>
  <img id="card" alt="Research Wrapped card" src="{card}">
  <p>
    <a id="download" download="{DOWNLOAD_FILE_NAME}" href="{card}">Download card</a>
    <a id="share" href="{share}" target="_blank" rel="noopener">Share</a>
  </p>
</div>
"#
    ))
}

/// Page state, rendered as the full HTML document.
#[derive(Debug, Default)]
struct Page {
    identifier: String,
    backend: String,
    alert: Option<String>,
    error: Option<String>,
    result: Option<String>,
}

impl Page {
    fn render(&self) -> String {
        let alert = self
            .alert
            .as_deref()
            .map(|a| format!("<p class=\"alert\" role=\"alert\">{}</p>", escape_html(a)))
            .unwrap_or_default();
        let error = self
            .error
            .as_deref()
            .map(|e| format!("<p class=\"error\" id=\"error\">{}</p>", escape_html(e)))
            .unwrap_or_default();
        let identifier = escape_html(&self.identifier);
        let backend = escape_html(&self.backend);
        let label = crate::controller::SUBMIT_LABEL;
        let result = self.result.as_deref().unwrap_or_default();

        format!(
            r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Research Wrapped</title>
<style>
{STYLE}</style>
</head>
<body>
<h1>Research Wrapped</h1>
<form method="get" action="/wrapped">
  <input name="identifier" placeholder="ORCID or OpenAlex author ID" value="{identifier}">
  <input name="backend" placeholder="Backend URL" value="{backend}">
  <button type="submit">{label}</button>
</form>
{alert}
{error}
{result}
</body>
</html>
"#
        )
    }
}

const STYLE: &str = r#"  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0 auto; max-width: 960px; padding: 16px; color: #1f2937; }
  form { display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 16px; }
  input { flex: 1; min-width: 220px; padding: 6px 8px; border: 1px solid #ddd; border-radius: 6px; }
  button { padding: 6px 12px; border-radius: 6px; border: 1px solid #7c3aed; background: #7c3aed; color: white; }
  .alert { padding: 8px; background: #fef3c7; border: 1px solid #f59e0b; border-radius: 6px; }
  .error { padding: 8px; background: #fee2e2; border: 1px solid #ef4444; border-radius: 6px; }
  .columns { display: flex; gap: 24px; }
  .columns section { flex: 1; }
  img { width: 100%; border: 1px solid #eee; border-radius: 8px; }
"#;
