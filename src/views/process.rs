use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::render::{escape, page};
use crate::routes::AppState;

/// The fixed, ordered set of operations the backend accepts. The query value
/// sent to `/start` is the label with spaces stripped ("Check End" →
/// "CheckEnd").
pub const OPERATIONS: [&str; 8] = [
    "Update", "Explore", "Download", "Error", "Check", "Check End", "Backup", "Fix",
];

pub async fn show(State(state): State<AppState>) -> Html<String> {
    // When the status fetch fails the state is unknown, not idle: render the
    // "unknown" running placeholder and keep every operation disabled.
    let current = match state.archive.general_info().await {
        Ok(info) => info.current_process,
        Err(err) => {
            tracing::warn!(?err, "fetch process info failed");
            "unknown".to_string()
        }
    };
    Html(render(&current))
}

#[derive(Debug, Deserialize)]
pub struct StartQuery {
    #[serde(default)]
    pub operation: String,
}

/// Fire-and-forget start of a backend operation: the request to the backend
/// is spawned without awaiting its response, mirroring the click behavior of
/// the operation buttons.
pub async fn start(State(state): State<AppState>, Query(query): Query<StartQuery>) -> Redirect {
    let archive = Arc::clone(&state.archive);
    tokio::spawn(async move {
        if let Err(err) = archive.start_operation(&query.operation).await {
            tracing::warn!(?err, operation = %query.operation, "start operation request failed");
        }
    });
    Redirect::to("/process/")
}

fn render(current_process: &str) -> String {
    let idle = current_process.is_empty();

    let mut body = String::from("<p>Process : </p>");
    if idle {
        body.push_str("<button class=\"button empty-process\">empty</button><br/>\n");
    } else {
        let _ = write!(
            body,
            "<button class=\"button running-process\">{}</button><br/>\n",
            escape(current_process)
        );
    }

    body.push_str("<div class=\"scroller\">\n");
    for operation in OPERATIONS {
        if idle {
            let _ = write!(
                body,
                "<a class=\"button able-process\" href=\"/process/start?operation={}\">{}</a><br/>\n",
                operation.replace(' ', ""),
                operation
            );
        } else {
            let _ = write!(
                body,
                "<button class=\"able-process\" disabled>{operation}</button><br/>\n"
            );
        }
    }
    body.push_str("</div>\n<br/>\n<a class=\"button\" href=\"/logs/\">Logs</a>\n");

    page(&[("Book", Some("/")), ("Process", None)], &body)
}
