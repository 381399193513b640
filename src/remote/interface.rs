use crate::error::Result;
use serde::Deserialize;
use url::Url;

/// Kind of an entry in a remote directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    /// Symlinks, submodules and anything else the index may report
    #[serde(other)]
    Other,
}

/// One element of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Direct download address, present for files
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RemoteEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Dir, download_url: None }
    }

    pub fn file(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            download_url: Some(download_url.into()),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Transport used to reach the remote template index.
pub trait TemplateFetcher {
    /// Fetches the listing at `url`.
    ///
    /// # Returns
    /// * `Ok(Some(entries))` - The listing
    /// * `Ok(None)` - The index answered "not found", any other non-success status,
    ///   or the request could not be completed
    /// * `Err(Error)` - A successful response whose body is not a listing
    fn fetch_listing(&self, url: &Url) -> Result<Option<Vec<RemoteEntry>>>;

    /// Downloads the raw bytes behind a `download_url`.
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}
