//! # Browse Page
//!
//! A single HTML page listing every license in a picker, plus the script
//! that fills in the detail view from the JSON API. The script is compiled
//! into the binary so the server has no runtime asset directory.

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use licenses_core::License;

use crate::state::AppState;

const MAIN_JS: &str = include_str!("../../static/main.js");

/// Build the browse page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/main.js", get(main_js))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.catalog.sorted()))
}

async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        MAIN_JS,
    )
}

/// Render the browse page for `licenses`, in the order given.
pub fn render_index(licenses: &[&License]) -> String {
    let mut options = String::new();
    for license in licenses {
        let id = escape_html(license.spdx_id());
        // Writing to a String cannot fail.
        let _ = writeln!(
            options,
            r#"        <option value="{id}">{id} - {}</option>"#,
            escape_html(license.title())
        );
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>License API</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }}
    pre {{ white-space: pre-wrap; background: #f5f5f5; padding: 1rem; }}
    code {{ background: #f5f5f5; padding: 0.1rem 0.3rem; }}
    .columns {{ display: flex; gap: 2rem; }}
  </style>
</head>
<body>
  <h1>License API</h1>
  <p>Pick a license, or use the <a href="/licenses">JSON API</a> (<a href="/openapi.json">OpenAPI</a>).</p>
  <label for="license-select">License</label>
  <select id="license-select">
        <option value="">Select a license</option>
{options}  </select>

  <section id="license-details" hidden>
    <h2><span id="license-title"></span> (<span id="license-spdx"></span>)</h2>
    <p id="license-nickname-container" hidden>Also known as <span id="license-nickname"></span></p>
    <p id="license-description"></p>
    <h3>How to apply</h3>
    <p id="license-how"></p>
    <p><code id="license-curl"></code></p>
    <p><a id="api-license-link" href="#">JSON</a> | <a id="api-license-raw-link" href="#">Raw text</a></p>
    <div id="license-note-container" hidden>
      <h3>Note</h3>
      <p id="license-note"></p>
    </div>
    <div class="columns">
      <div><h3>Permissions</h3><ul id="license-permissions"></ul></div>
      <div><h3>Conditions</h3><ul id="license-conditions"></ul></div>
      <div><h3>Limitations</h3><ul id="license-limitations"></ul></div>
    </div>
    <div id="license-using-container" hidden>
      <h3>Who uses it</h3>
      <ul id="license-using"></ul>
    </div>
    <h3>License text <button id="copy-license-content" type="button">Copy</button></h3>
    <pre id="license-raw-content"></pre>
  </section>

  <script src="/static/main.js"></script>
</body>
</html>
"##
    )
}

/// Escape text for use in HTML element content or a quoted attribute.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
