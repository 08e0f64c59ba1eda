//! Plain-text downloads of the upstream stylesheets and API responses.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::{
    config::USER_AGENT,
    error::{Error, Result},
};

/// Something that can turn a URL into its response body.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher sending the fixed user agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Requests never time out; a stalled upstream stalls the run.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    /// The body is returned whatever the status; callers decide what an error page means.
    fn fetch(&self, url: &str) -> Result<String> {
        let transport = |e: reqwest::Error| Error::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {status} for {url}");
        }

        let body = response.text().map_err(transport)?;
        debug!("Fetched {url} ({} bytes)", body.len());
        Ok(body)
    }
}
