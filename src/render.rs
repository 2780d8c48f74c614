use std::fmt::Write as _;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; }\n\
header { background: #222; color: #eee; padding: 8px 16px; }\n\
header a { color: #eee; text-decoration: none; }\n\
.page { padding: 16px; }\n\
.page p { display: inline; margin: 0; }\n\
.scroller { max-height: 70vh; overflow-y: auto; }\n\
.button { display: inline-block; border: 1px solid #888; border-radius: 3px;\n\
          padding: 4px 10px; margin: 2px; color: #222; text-decoration: none; }\n\
.empty-process { background: #dfd; }\n\
.running-process { background: #fd8; }\n\
.able-process[disabled] { color: #aaa; }\n\
table.book { width: 100%; cursor: pointer; }\n\
table.book td { padding: 2px 8px; }\n";

/// A breadcrumb segment; `None` renders as plain text, `Some` as a link.
pub type Crumb<'a> = (&'a str, Option<&'a str>);

/// Wrap rendered view content in the shared page shell.
pub fn page(crumbs: &[Crumb<'_>], body: &str) -> String {
    let mut header = String::new();
    for (i, (label, href)) in crumbs.iter().enumerate() {
        if i > 0 {
            header.push_str(" &gt; ");
        }
        match href {
            Some(href) => {
                let _ = write!(header, "<a href=\"{}\"><p>{}</p></a>", href, escape(label));
            }
            None => {
                let _ = write!(header, "<p>{}</p>", escape(label));
            }
        }
    }

    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Book</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <header>{header}</header>\n<div class=\"page\">\n{body}\n</div>\n</body>\n</html>\n"
    )
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
