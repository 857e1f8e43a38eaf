//! HTTP client for the ping-samples endpoints.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::decode::decode_overview;
use crate::{Error, Overview, Region};

/// Endpoint template; `{abbr}` is replaced with the region abbreviation.
const BASE_URL_TEMPLATE: &str = "http://netint-{abbr}.linode.com/ping/samples";

/// Reserved region name that routes to the pinned fixture below.
const TEST_REGION: &str = "test";

/// Static copy of a real response, used by automated integration checks
/// so they do not depend on the live endpoints.
///
/// Placeholder address. TODO: upload a captured response and pin its raw
/// URL here before relying on the `"test"` sentinel anywhere.
const TEST_FIXTURE_URL: &str =
    "https://gist.githubusercontent.com/linode-netint/fixtures/raw/ping-samples.json";

/// Client for fetching region overviews from the network-internals
/// endpoints.
///
/// The endpoints are unauthenticated; the client only carries a timeout and
/// a descriptive `User-Agent` so Linode can see where requests originate.
#[derive(Debug, Clone)]
pub struct NetintClient {
    client: Client,
    url_template: String,
}

impl NetintClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new builder for configuring the client.
    pub fn builder() -> NetintClientBuilder {
        NetintClientBuilder::default()
    }

    /// Fetch the overview for a region.
    pub async fn overview(&self, region: Region) -> Result<Overview, Error> {
        let url = self.endpoint_url(region.abbreviation());
        self.fetch(&url, region.name()).await
    }

    /// Fetch an overview by region name.
    ///
    /// Unknown names fail with [`Error::UnknownRegion`] before any request
    /// is issued. The reserved name `"test"` routes to a pinned fixture
    /// response instead of the production endpoint.
    pub async fn overview_by_name(&self, name: &str) -> Result<Overview, Error> {
        if name == TEST_REGION {
            return self.fetch(TEST_FIXTURE_URL, name).await;
        }
        match Region::from_name(name) {
            Some(region) => self.overview(region).await,
            None => Err(Error::UnknownRegion(name.to_string())),
        }
    }

    /// Fetch every region's overview, keyed by region name.
    ///
    /// Regions are fetched sequentially in registry order. The first
    /// failure aborts the whole operation; no partial map is returned.
    pub async fn all_overviews(&self) -> Result<BTreeMap<String, Overview>, Error> {
        let mut overviews = BTreeMap::new();
        for region in Region::ALL {
            let overview = self.overview(region).await?;
            overviews.insert(region.name().to_string(), overview);
        }
        Ok(overviews)
    }

    /// Fetch the overview for the Dallas region.
    pub async fn dallas(&self) -> Result<Overview, Error> {
        self.overview(Region::Dallas).await
    }

    /// Fetch the overview for the Fremont region.
    pub async fn fremont(&self) -> Result<Overview, Error> {
        self.overview(Region::Fremont).await
    }

    /// Fetch the overview for the Atlanta region.
    pub async fn atlanta(&self) -> Result<Overview, Error> {
        self.overview(Region::Atlanta).await
    }

    /// Fetch the overview for the Newark region.
    pub async fn newark(&self) -> Result<Overview, Error> {
        self.overview(Region::Newark).await
    }

    /// Fetch the overview for the London region.
    pub async fn london(&self) -> Result<Overview, Error> {
        self.overview(Region::London).await
    }

    /// Fetch the overview for the Tokyo region.
    pub async fn tokyo(&self) -> Result<Overview, Error> {
        self.overview(Region::Tokyo).await
    }

    async fn fetch(&self, url: &str, name: &str) -> Result<Overview, Error> {
        debug!(region = name, %url, "fetching ping samples");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        debug!(region = name, bytes = body.len(), "decoding response");
        decode_overview(&body, name)
    }

    fn endpoint_url(&self, abbr: &str) -> String {
        self.url_template.replace("{abbr}", abbr)
    }
}

impl Default for NetintClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`NetintClient`].
#[derive(Debug, Default)]
pub struct NetintClientBuilder {
    timeout: Option<Duration>,
    url_template: Option<String>,
}

impl NetintClientBuilder {
    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the endpoint template (default: the production template).
    ///
    /// `{abbr}` is replaced with the region abbreviation. Intended for
    /// pointing tests at a local server.
    pub fn url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> NetintClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("LinodeNetInt/{} (rust reqwest)", crate::VERSION))
            .build()
            .expect("Failed to build HTTP client");

        NetintClient {
            client,
            url_template: self
                .url_template
                .unwrap_or_else(|| BASE_URL_TEMPLATE.to_string()),
        }
    }
}
