use std::fmt::Write as _;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::model::SiteStats;
use crate::render::page;
use crate::routes::AppState;
use crate::views::search_form;

pub async fn show(State(state): State<AppState>, Path(name): Path<String>) -> Html<String> {
    Html(load_and_render(&state, &name).await)
}

// The fixed `/site/` route mounts the same view without a site name; the
// backend lookup fails and the placeholder zeros are shown.
pub async fn show_unnamed(State(state): State<AppState>) -> Html<String> {
    Html(load_and_render(&state, "").await)
}

async fn load_and_render(state: &AppState, name: &str) -> String {
    let stats = match state.archive.site_stats(name).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(?err, site = name, "fetch site stats failed");
            SiteStats::default()
        }
    };
    render(name, &stats)
}

fn render(name: &str, stats: &SiteStats) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<p>Book Count : {} ({} + {})</p><br/>\n",
        stats.book_count + stats.error_count,
        stats.book_count,
        stats.error_count
    );
    let _ = write!(
        body,
        "<p>Record Count : {} ({} + {})</p><br/>\n",
        stats.book_record_count + stats.error_record_count,
        stats.book_record_count,
        stats.error_record_count
    );
    let _ = write!(
        body,
        "<p>End Count : {} ({})</p><br/>\n",
        stats.end_count, stats.end_record_count
    );
    let _ = write!(
        body,
        "<p>Download Count : {} ({})</p><br/>\n",
        stats.download_count, stats.download_record_count
    );
    let _ = write!(body, "<p>Read Count : {}</p><br/>\n", stats.read_count);
    let _ = write!(body, "<p>Max ID : {}</p><br/>\n", stats.max_num);

    body.push_str("<p>Search</p><br/>\n<hr/>\n");
    body.push_str(&search_form(name, "", ""));

    page(&[("Book", Some("/")), ("Site", None), (name, None)], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SiteStats {
        SiteStats {
            book_count: 12,
            error_count: 3,
            end_count: 7,
            download_count: 2,
            book_record_count: 40,
            error_record_count: 5,
            end_record_count: 9,
            download_record_count: 4,
            read_count: 1,
            max_num: 9876,
        }
    }

    #[test]
    fn renders_derived_sums_alongside_components() {
        let html = render("alpha", &stats());
        assert!(html.contains("Book Count : 15 (12 + 3)"));
        assert!(html.contains("Record Count : 45 (40 + 5)"));
        assert!(html.contains("End Count : 7 (9)"));
        assert!(html.contains("Download Count : 2 (4)"));
        assert!(html.contains("Read Count : 1"));
        assert!(html.contains("Max ID : 9876"));
    }

    #[test]
    fn hosts_search_form_targeting_site_search() {
        let html = render("alpha", &stats());
        assert!(html.contains("action=\"/alpha/search\""));
        assert!(html.contains("name=\"title\""));
        assert!(html.contains("name=\"writer\""));
    }

    #[test]
    fn placeholder_stats_render_as_zeros() {
        let html = render("alpha", &SiteStats::default());
        assert!(html.contains("Book Count : 0 (0 + 0)"));
    }
}
