use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Parse a backend JSON body after normalizing raw tabs to spaces.
///
/// The backend writes the current process name (and occasionally log text)
/// with literal tab characters inside JSON strings, which strict parsers
/// reject as control characters.
pub fn from_tabbed_json<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(&body.replace('\t', " "))
}

/// `GET /info` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralInfo {
    pub current_process: String,
    pub site_names: Vec<String>,
}

/// `GET /info/<site>` response. The backend serializes every counter as a
/// JSON string (`"bookCount": "12"`), so counters accept either form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteStats {
    #[serde(deserialize_with = "lenient_count")]
    pub book_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub error_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub end_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub download_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub book_record_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub error_record_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub end_record_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub download_record_count: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub read_count: i64,
    #[serde(rename = "maxid", deserialize_with = "lenient_count")]
    pub max_num: i64,
}

/// `GET /process` response once parsed (see `logparse`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogBundle {
    pub time: String,
    pub logs: Vec<String>,
}

/// `GET /search/<site>` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResultPage {
    pub books: Vec<BookSummary>,
}

/// One row of a search result page. Older backend revisions emit the book
/// number under `id` instead of `num`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookSummary {
    #[serde(alias = "id", deserialize_with = "lenient_count")]
    pub num: i64,
    pub title: String,
    pub writer: String,
    pub update: String,
    pub chapter: String,
}

/// `GET /info/<site>/<num>` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookDetail {
    pub title: String,
    pub writer: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub update: String,
    pub chapter: String,
    #[serde(deserialize_with = "lenient_string")]
    pub version: String,
    pub download: bool,
}

impl Default for BookDetail {
    // Placeholder state shown until (or in place of) a successful fetch.
    fn default() -> Self {
        Self {
            title: "unknown".to_string(),
            writer: "unknown".to_string(),
            kind: String::new(),
            update: "unknown".to_string(),
            chapter: "unknown".to_string(),
            version: String::new(),
            download: false,
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(text) => Ok(text),
        Raw::Number(n) => Ok(n.to_string()),
    }
}
