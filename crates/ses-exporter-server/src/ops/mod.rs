//! Operational HTTP endpoints.
//!
//! - `/`          : landing page
//! - `/healthz`   : liveness (never calls SES)
//! - metrics path : Prometheus text format, one SES fetch per request

use std::fmt::Write;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use ses_exporter_core::exposition;

use crate::app_state::AppState;
use crate::error::ScrapeFailure;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let path = &state.cfg().web.telemetry_path;

    let mut items = String::new();
    for d in state.collector().describe().iter() {
        let _ = writeln!(items, "<li><code>{}</code> {}</li>", d.fq_name, d.help);
    }

    Html(format!(
        "<html>
<head><title>AWS SES Exporter</title></head>
<body>
<h1>AWS SES Exporter</h1>
<p><a href='{path}'>Metrics</a></p>
<ul>
{items}</ul>
</body>
</html>
"
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let mut body = String::new();

    match state.collector().render(&mut body).await {
        Ok(count) => {
            let took = started.elapsed();
            state.metrics().record_success(took);
            state.metrics().render(&mut body);
            tracing::debug!(gauges = count, ?took, "scrape succeeded");

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
                body,
            )
                .into_response()
        }
        Err(err) => {
            let took = started.elapsed();
            let code = err.code().as_str();
            state.metrics().record_failure(code, took);
            tracing::error!(
                code,
                transient = err.is_transient(),
                ?took,
                error = %err,
                "scrape failed"
            );

            ScrapeFailure(err).into_response()
        }
    }
}
