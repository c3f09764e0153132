use log::debug;
use url::Url;

pub const THEMES_URL: &str = "https://highlightjs.org/examples";

/// Something that can hand out the HTML of a page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &Url) -> anyhow::Result<String>;
}

impl PageSource for reqwest::Client {
    async fn fetch(&self, url: &Url) -> anyhow::Result<String> {
        let response = self.get(url.clone()).send().await?.error_for_status()?;
        debug!("{url} returned {:?}", response.status());
        Ok(response.text().await?)
    }
}

/// Fetches over HTTP with a client built on each request.
///
/// A client that cannot be built fails the fetch like any other transport error.
pub struct HttpSource<F = fn() -> reqwest::Result<reqwest::Client>> {
    build_client: F,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            build_client: reqwest_client,
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fn() -> reqwest::Result<reqwest::Client>> HttpSource<F> {
    pub fn with_client_builder(build_client: F) -> Self {
        Self { build_client }
    }
}

impl<F: Fn() -> reqwest::Result<reqwest::Client>> PageSource for HttpSource<F> {
    async fn fetch(&self, url: &Url) -> anyhow::Result<String> {
        let client = (self.build_client)()?;
        client.fetch(url).await
    }
}

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().connection_verbose(true).build()
}

pub fn themes_url() -> Url {
    Url::parse(THEMES_URL).expect("THEMES_URL is a valid url")
}
