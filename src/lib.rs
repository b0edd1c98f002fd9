// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Verkko - Testable HTTP Transport
//!
//! A narrow GET client contract with a deterministic outcome model, and an
//! interception harness that fakes or observes network traffic in tests.
//!
//! ## Features
//!
//! - Two-case result: body plus metadata, or an error
//! - Strict classification of raw transport output (body, response, error)
//! - Awaited and callback client forms with identical semantics
//! - reqwest-backed transport with forwarded configuration
//! - Interception harness: stubs, request observers, scoped install
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use verkko::harness::InterceptionHarness;
//! use verkko::{HttpClient, ResponseMetadata, TransportHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = url::Url::parse("https://example.com")?;
//!
//!     let harness = InterceptionHarness::new();
//!     let _guard = harness.install_scoped();
//!     harness.stub(
//!         Some("any data".into()),
//!         Some(ResponseMetadata::new(url.clone(), reqwest::StatusCode::OK).into()),
//!         None,
//!     );
//!
//!     let client = TransportHttpClient::with_transport(Arc::new(harness.clone()));
//!     let (body, metadata) = client.get(&url).await?;
//!     assert_eq!(&body[..], b"any data");
//!     assert_eq!(metadata.status_code(), 200);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod harness;
pub mod http;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-exports for convenience

// Errors
pub use error::{Error, Result, TransportError};

// HTTP
pub use http::{
    classify, Completion, GenericResponse, HttpClient, HttpClientResult, RawResponse, Request,
    ResponseMetadata, TransportHttpClient,
};

// Transport
pub use transport::{Delivery, LoadSignal, LoadSink, ReqwestTransport, Transport, TransportConfig};

// Harness
pub use harness::{InstallGuard, InterceptionHarness, StubConfiguration};

/// Verkko version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
