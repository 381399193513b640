use reqwest::blocking::Client;
use url::Url;

use crate::constants::USER_AGENT;
use crate::error::Result;
use crate::remote::interface::{RemoteEntry, TemplateFetcher};

/// Blocking HTTP transport for the remote template index.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl TemplateFetcher for HttpFetcher {
    fn fetch_listing(&self, url: &Url) -> Result<Option<Vec<RemoteEntry>>> {
        log::debug!("Fetching listing '{url}'");

        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Request to '{url}' failed: {e}");
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::debug!("Listing '{url}' answered with status {status}");
            return Ok(None);
        }

        Ok(Some(response.json::<Vec<RemoteEntry>>()?))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Downloading '{url}'");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
