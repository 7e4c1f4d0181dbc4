pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// Progress callback: bytes received so far, total when the server sent a
/// content length.
pub type ProgressFn = dyn Fn(u64, Option<u64>) + Send + Sync;

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
