use std::fmt::Write as _;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::model::BookSummary;
use crate::render::{escape, page};
use crate::routes::AppState;
use crate::views::{book_path, search_form, search_path};

/// The backend returns at most this many results per page; a shorter page
/// marks the end of the results (there is no total-count field).
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub page: u32,
}

pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let books = match state
        .archive
        .search_books(&name, &query.title, &query.writer, query.page)
        .await
    {
        Ok(result) => result.books,
        Err(err) => {
            tracing::warn!(?err, site = %name, "search failed");
            Vec::new()
        }
    };
    Html(render(&name, &query, &books))
}

fn render(name: &str, query: &SearchQuery, books: &[BookSummary]) -> String {
    let mut body = search_form(name, &query.title, &query.writer);

    body.push_str("<div class=\"pager\">\n");
    if query.page == 0 {
        body.push_str("<button class=\"lastPage\" disabled>&lt;</button>\n");
    } else {
        let _ = write!(
            body,
            "<a class=\"button lastPage\" href=\"{}\">&lt;</a>\n",
            search_path(name, &query.title, &query.writer, query.page - 1)
        );
    }
    let _ = write!(body, "<p class=\"page\">{}</p>\n", query.page);
    if books.len() < PAGE_SIZE {
        body.push_str("<button class=\"nextPage\" disabled>&gt;</button>\n");
    } else {
        let _ = write!(
            body,
            "<a class=\"button nextPage\" href=\"{}\">&gt;</a>\n",
            search_path(name, &query.title, &query.writer, query.page + 1)
        );
    }
    body.push_str("</div>\n");

    body.push_str("<div class=\"scroller\">\n");
    if books.is_empty() {
        body.push_str("<p>No matched result found</p>\n");
    }
    for book in books {
        let _ = write!(
            body,
            "<a href=\"{}\"><table class=\"book\"><tbody>\n\
             <tr><td class=\"title-info\">{}</td><td class=\"writer-info\">{}</td></tr>\n\
             <tr><td class=\"date-info\">{}</td><td class=\"chapter-info\">{}</td></tr>\n\
             </tbody></table></a>\n<hr/>\n",
            book_path(name, book.num),
            escape(&book.title),
            escape(&book.writer),
            escape(&book.update),
            escape(&book.chapter),
        );
    }
    body.push_str("</div>\n");

    page(&[("Book", Some("/")), ("Search", None)], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(num: i64) -> BookSummary {
        BookSummary {
            num,
            title: format!("title-{num}"),
            writer: "writer".to_string(),
            update: "2020-01-01".to_string(),
            chapter: "ch".to_string(),
        }
    }

    fn query(page: u32) -> SearchQuery {
        SearchQuery {
            title: "t".to_string(),
            writer: "w".to_string(),
            page,
        }
    }

    #[test]
    fn empty_result_renders_placeholder() {
        let html = render("alpha", &query(0), &[]);
        assert!(html.contains("No matched result found"));
    }

    #[test]
    fn rows_link_to_book_view() {
        let html = render("alpha", &query(0), &[book(42)]);
        assert!(html.contains("href=\"/alpha/book/42\""));
        assert!(html.contains("title-42"));
    }

    #[test]
    fn previous_disabled_on_first_page_only() {
        let first = render("alpha", &query(0), &[]);
        assert!(first.contains("<button class=\"lastPage\" disabled>"));

        let later = render("alpha", &query(2), &[]);
        assert!(later.contains("href=\"/alpha/search?title=t&writer=w&page=1\""));
        assert!(!later.contains("<button class=\"lastPage\" disabled>"));
    }

    #[test]
    fn next_enabled_only_on_a_full_page() {
        let full: Vec<BookSummary> = (0..PAGE_SIZE as i64).map(book).collect();
        let html = render("alpha", &query(0), &full);
        assert!(html.contains("href=\"/alpha/search?title=t&writer=w&page=1\""));

        let short: Vec<BookSummary> = (0..PAGE_SIZE as i64 - 1).map(book).collect();
        let html = render("alpha", &query(0), &short);
        assert!(html.contains("<button class=\"nextPage\" disabled>"));
    }

    #[test]
    fn form_prefills_current_query() {
        let html = render("alpha", &query(0), &[]);
        assert!(html.contains("value=\"t\""));
        assert!(html.contains("value=\"w\""));
    }
}
