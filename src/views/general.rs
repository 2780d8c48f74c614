use std::fmt::Write as _;

use axum::extract::State;
use axum::response::Html;

use crate::model::GeneralInfo;
use crate::render::{escape, page};
use crate::routes::AppState;
use crate::views::site_path;

pub async fn show(State(state): State<AppState>) -> Html<String> {
    let info = match state.archive.general_info().await {
        Ok(info) => info,
        Err(err) => {
            tracing::warn!(?err, "fetch general info failed");
            GeneralInfo::default()
        }
    };
    Html(render(&info))
}

fn render(info: &GeneralInfo) -> String {
    let mut body = String::from("<p>Process : </p>");
    if info.current_process.is_empty() {
        body.push_str("<a class=\"button empty-process\" href=\"/process/\">empty</a><br/>\n");
    } else {
        let _ = write!(
            body,
            "<a class=\"button running-process\" href=\"/process/\">{}</a><br/>\n",
            escape(&info.current_process)
        );
    }
    for name in &info.site_names {
        let _ = write!(
            body,
            "<a class=\"button site\" href=\"{}\">{}</a>\n",
            site_path(name),
            escape(name)
        );
    }

    page(&[("Book", None)], &body)
}
