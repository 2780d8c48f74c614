use std::fmt::Write as _;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::model::BookDetail;
use crate::render::{escape, page};
use crate::routes::AppState;
use crate::views::site_path;

pub async fn show(
    State(state): State<AppState>,
    Path((name, num)): Path<(String, String)>,
) -> Html<String> {
    let book = match state.archive.book_detail(&name, &num).await {
        Ok(book) => book,
        Err(err) => {
            tracing::warn!(?err, site = %name, num = %num, "fetch book detail failed");
            BookDetail::default()
        }
    };
    let download_url = state.archive.download_url(&name, &num);
    Html(render(&name, &book, &download_url))
}

fn render(name: &str, book: &BookDetail, download_url: &str) -> String {
    let mut body = String::new();
    let _ = write!(body, "<p>Title : {}</p><br/>\n", escape(&book.title));
    let _ = write!(body, "<p>Writer : {}</p><br/>\n", escape(&book.writer));
    let _ = write!(body, "<p>Type : {}</p><br/>\n", escape(&book.kind));
    let _ = write!(body, "<p>Update : {}</p><br/>\n", escape(&book.update));
    let _ = write!(body, "<p>Chapter : {}</p><br/>\n", escape(&book.chapter));
    let _ = write!(body, "<p>Version : {}</p><br/>\n", escape(&book.version));

    if book.download {
        let _ = write!(
            body,
            "<a class=\"button download\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Download</a>\n",
            escape(download_url)
        );
    } else {
        let _ = write!(
            body,
            "<a class=\"button search\" href=\"https://www.google.com/search?q={}\" \
             target=\"_blank\" rel=\"noopener\">Search Online</a>\n",
            urlencoding::encode(&format!("{name} {}", book.title))
        );
    }

    let name_href = site_path(name);
    page(
        &[
            ("Book", Some("/")),
            (name, Some(name_href.as_str())),
            (book.title.as_str(), None),
        ],
        &body,
    )
}
