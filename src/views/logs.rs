use std::fmt::Write as _;

use axum::extract::State;
use axum::response::Html;

use crate::model::LogBundle;
use crate::render::{escape, page};
use crate::routes::AppState;

pub async fn show(State(state): State<AppState>) -> Html<String> {
    let bundle = match state.archive.process_logs().await {
        Ok(bundle) => bundle,
        Err(err) => {
            tracing::warn!(?err, "fetch process logs failed");
            LogBundle::default()
        }
    };
    Html(render(&bundle))
}

fn render(bundle: &LogBundle) -> String {
    let mut body = format!("<p>Datetime : {}</p>\n<br/><br/>\n<hr/>\n", escape(&bundle.time));
    body.push_str("<div class=\"scroller\" style=\"height: 70vh\">\n");
    for line in &bundle.logs {
        let _ = write!(body, "<p>{}</p><br/>\n", escape(line));
    }
    body.push_str("</div>\n");

    page(
        &[("Book", Some("/")), ("Process", Some("/process/")), ("Logs", None)],
        &body,
    )
}
