//! Remote template index: listing transport and variant resolution.

pub mod http;
pub mod interface;
pub mod resolver;

pub use http::HttpFetcher;
pub use interface::{EntryKind, RemoteEntry, TemplateFetcher};
pub use resolver::{Variant, VariantResolver};
