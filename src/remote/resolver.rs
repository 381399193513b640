use std::fmt::Display;

use url::Url;

use crate::error::{Error, Result};
use crate::remote::interface::{RemoteEntry, TemplateFetcher};

/// A (language, framework, version) selection in the remote template index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub language: String,
    pub framework: String,
    pub version: String,
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, and {}", self.language, self.framework, self.version)
    }
}

/// Answers listing queries against the remote template index.
pub struct VariantResolver<'a> {
    fetcher: &'a dyn TemplateFetcher,
    base: Url,
}

impl<'a> VariantResolver<'a> {
    /// # Arguments
    /// * `fetcher` - Transport used for every listing
    /// * `base` - Address the language/framework/version segments are joined onto
    pub fn new(fetcher: &'a dyn TemplateFetcher, base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::Other(anyhow::anyhow!(
                "Template address '{base}' cannot hold path segments"
            )));
        }
        Ok(Self { fetcher, base })
    }

    /// Address of the listing for the given path segments.
    pub fn listing_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Framework names available for `language`; empty when nothing is available.
    pub fn frameworks_for(&self, language: &str) -> Result<Vec<String>> {
        self.dir_names(&[language])
    }

    /// Version names available for `language`/`framework`; empty when nothing is available.
    pub fn versions_for(&self, language: &str, framework: &str) -> Result<Vec<String>> {
        self.dir_names(&[language, framework])
    }

    /// Fetches the template listing for a fully chosen variant.
    ///
    /// # Returns
    /// * `Err(Error::TemplateNotFound)` - The index has no such variant
    pub fn resolve(&self, variant: &Variant) -> Result<Vec<RemoteEntry>> {
        let url = self.listing_url(&[&variant.language, &variant.framework, &variant.version]);
        self.fetcher
            .fetch_listing(&url)?
            .ok_or(Error::TemplateNotFound { url: url.to_string() })
    }

    fn dir_names(&self, segments: &[&str]) -> Result<Vec<String>> {
        let url = self.listing_url(segments);
        let names = self
            .fetcher
            .fetch_listing(&url)?
            .unwrap_or_default()
            .into_iter()
            .filter(RemoteEntry::is_dir)
            .map(|entry| entry.name)
            .collect();
        Ok(names)
    }
}
