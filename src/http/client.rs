// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client contract

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::task::JoinHandle;
use url::Url;

use super::metadata::ResponseMetadata;
use super::result::HttpClientResult;
use crate::error::Result;

/// Completion handler for [`HttpClient::get_with`]
pub type Completion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Perform a GET and obtain body plus metadata, or fail
///
/// Implementors only provide [`HttpClient::get`]. The callback and batch
/// forms are derived from it so classification lives in one place.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use verkko::{HttpClient, TransportHttpClient};
///
/// # async fn run() -> verkko::Result<()> {
/// let client = Arc::new(TransportHttpClient::new()?);
/// let url = url::Url::parse("https://example.com")?;
///
/// let (body, metadata) = client.get(&url).await?;
/// println!("{} bytes, status {}", body.len(), metadata.status_code());
///
/// client.get_with(url, Box::new(|result| {
///     println!("success: {}", result.is_success());
/// }));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    /// GET `url`, suspending until the underlying transport finishes
    async fn get(&self, url: &Url) -> Result<(Bytes, ResponseMetadata)>;

    /// GET `url` and deliver the result to `completion` on a spawned task
    ///
    /// `completion` runs exactly once, never before this returns. Must be
    /// called from within a Tokio runtime.
    fn get_with(self: Arc<Self>, url: Url, completion: Completion) -> JoinHandle<()> {
        tokio::spawn(async move {
            let result = HttpClientResult::from(self.get(&url).await);
            completion(result);
        })
    }

    /// GET several URLs concurrently, results in input order
    async fn get_all(&self, urls: &[Url]) -> Vec<HttpClientResult> {
        let futures: Vec<_> = urls.iter().map(|url| self.get(url)).collect();
        futures::future::join_all(futures)
            .await
            .into_iter()
            .map(HttpClientResult::from)
            .collect()
    }
}
