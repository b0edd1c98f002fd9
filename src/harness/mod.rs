// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception for tests
//!
//! Fakes or observes network behaviour without touching a real network.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use verkko::harness::InterceptionHarness;
//! use verkko::{HttpClient, TransportHttpClient};
//!
//! # async fn run() -> verkko::Result<()> {
//! let harness = InterceptionHarness::new();
//! let _guard = harness.install_scoped();
//! harness.observe(|request| assert_eq!(request.method, reqwest::Method::GET));
//!
//! let client = TransportHttpClient::with_transport(Arc::new(harness.clone()));
//! client.get(&url::Url::parse("https://example.com")?).await?;
//! # Ok(())
//! # }
//! ```

mod interceptor;
mod stub;

pub use interceptor::{shared, InstallGuard, InterceptionHarness, RequestObserver};
pub use stub::StubConfiguration;
