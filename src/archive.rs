use anyhow::Context as _;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::logparse;
use crate::model::{BookDetail, GeneralInfo, LogBundle, SearchResultPage, SiteStats, from_tabbed_json};

/// The archive backend, one method per consumed endpoint.
///
/// Implemented over HTTP in production; views depend on the trait so tests
/// can substitute canned responses.
#[async_trait]
pub trait Archive: Send + Sync {
    /// `GET /info`
    async fn general_info(&self) -> anyhow::Result<GeneralInfo>;

    /// `GET /start?operation=<operation>`. The response body is ignored.
    async fn start_operation(&self, operation: &str) -> anyhow::Result<()>;

    /// `GET /process`
    async fn process_logs(&self) -> anyhow::Result<LogBundle>;

    /// `GET /info/<site>`
    async fn site_stats(&self, site: &str) -> anyhow::Result<SiteStats>;

    /// `GET /search/<site>?title=&writer=&page=`
    async fn search_books(
        &self,
        site: &str,
        title: &str,
        writer: &str,
        page: u32,
    ) -> anyhow::Result<SearchResultPage>;

    /// `GET /info/<site>/<num>`
    async fn book_detail(&self, site: &str, num: &str) -> anyhow::Result<BookDetail>;

    /// URL of `GET /download/<site>/<num>`, opened directly by the browser.
    fn download_url(&self, site: &str, num: &str) -> String;
}

#[derive(Debug)]
pub struct HttpArchive {
    client: reqwest::Client,
    base: Url,
}

impl HttpArchive {
    pub fn new(base: Url) -> anyhow::Result<Self> {
        if base.cannot_be_a_base() {
            anyhow::bail!("backend url must be hierarchical (http/https): {base}");
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Cannot fail: the base is checked to be hierarchical in new().
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_text(&self, url: Url) -> anyhow::Result<String> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        resp.text().await.with_context(|| format!("read body of {url}"))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        let body = self.fetch_text(url.clone()).await?;
        from_tabbed_json(&body).with_context(|| format!("parse response of {url}"))
    }
}

#[async_trait]
impl Archive for HttpArchive {
    async fn general_info(&self) -> anyhow::Result<GeneralInfo> {
        self.fetch_json(self.endpoint(&["info"])).await
    }

    async fn start_operation(&self, operation: &str) -> anyhow::Result<()> {
        let mut url = self.endpoint(&["start"]);
        url.query_pairs_mut().append_pair("operation", operation);
        self.client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Ok(())
    }

    async fn process_logs(&self) -> anyhow::Result<LogBundle> {
        let body = self.fetch_text(self.endpoint(&["process"])).await?;
        Ok(logparse::parse_process_body(&body))
    }

    async fn site_stats(&self, site: &str) -> anyhow::Result<SiteStats> {
        self.fetch_json(self.endpoint(&["info", site])).await
    }

    async fn search_books(
        &self,
        site: &str,
        title: &str,
        writer: &str,
        page: u32,
    ) -> anyhow::Result<SearchResultPage> {
        let mut url = self.endpoint(&["search", site]);
        url.query_pairs_mut()
            .append_pair("title", title)
            .append_pair("writer", writer)
            .append_pair("page", &page.to_string());
        self.fetch_json(url).await
    }

    async fn book_detail(&self, site: &str, num: &str) -> anyhow::Result<BookDetail> {
        self.fetch_json(self.endpoint(&["info", site, num])).await
    }

    fn download_url(&self, site: &str, num: &str) -> String {
        self.endpoint(&["download", site, num]).into()
    }
}
