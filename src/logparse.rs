use std::sync::OnceLock;

use regex::Regex;

use crate::model::LogBundle;

/// Parse a `GET /process` body. This endpoint is the only one with a
/// recovery path: the backend assembles the payload by string concatenation
/// from raw log lines, so embedded double quotes regularly break the JSON.
///
/// Tier one repairs the usual damage (tabs, HTML attribute quotes) and
/// JSON-parses the result. Tier two treats the raw body as a comma-separated
/// list of quote-stripped lines with `time` set to `"unknown"`. It never
/// fails.
pub fn parse_process_body(body: &str) -> LogBundle {
    match parse_as_json(body) {
        Ok(bundle) => bundle,
        Err(err) => {
            tracing::debug!(%err, "process body is not parseable JSON, using plain-text fallback");
            LogBundle {
                time: "unknown".to_string(),
                logs: body.replace('"', "").split(',').map(str::to_string).collect(),
            }
        }
    }
}

fn parse_as_json(body: &str) -> serde_json::Result<LogBundle> {
    // Normalization order matters: the attribute-quote rules assume tabs are
    // already gone, and the `">` rule must run after the mid-text rule.
    let normalized = body.replace('\t', " ").replace("=\"", "='");
    let normalized = quote_before_word().replace_all(&normalized, "' $1");
    let normalized = normalized.replace("\">", "'>");
    serde_json::from_str(&normalized)
}

// A double quote followed by a space and a word character, i.e. the closing
// quote of an HTML attribute that is not at the end of the tag.
fn quote_before_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"" (\w)"#).expect("static regex"))
}
