pub mod book;
pub mod general;
pub mod logs;
pub mod process;
pub mod search;
pub mod site;

use crate::render::escape;

/// Console path of a site view, with the name percent-encoded.
pub(crate) fn site_path(name: &str) -> String {
    format!("/{}/", urlencoding::encode(name))
}

pub(crate) fn search_path(name: &str, title: &str, writer: &str, page: u32) -> String {
    format!(
        "/{}/search?title={}&writer={}&page={}",
        urlencoding::encode(name),
        urlencoding::encode(title),
        urlencoding::encode(writer),
        page
    )
}

pub(crate) fn book_path(name: &str, num: i64) -> String {
    format!("/{}/book/{num}", urlencoding::encode(name))
}

/// The title/writer search form shared by the site and search views.
/// Submitting navigates to `/<name>/search` with the values in the query
/// string.
pub(crate) fn search_form(name: &str, title: &str, writer: &str) -> String {
    format!(
        "<form action=\"/{}/search\" method=\"get\" autocomplete=\"off\">\n\
         <label for=\"title\">Title : </label>\n\
         <input type=\"text\" id=\"title\" name=\"title\" placeholder=\"Title\" value=\"{}\"/><br/>\n\
         <label for=\"writer\">Writer : </label>\n\
         <input type=\"text\" id=\"writer\" name=\"writer\" placeholder=\"Writer name\" value=\"{}\"/><br/>\n\
         <input type=\"submit\"/>\n\
         </form>\n",
        urlencoding::encode(name),
        escape(title),
        escape(writer),
    )
}
