// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Underlying transport layer
//!
//! A [`Transport`] performs one outbound request and reports what happened on
//! three raw channels. It does not classify the outcome; that is the job of
//! [`crate::http::TransportHttpClient`].

mod config;
mod delivery;
mod network;

use async_trait::async_trait;

use crate::http::Request;

pub use config::TransportConfig;
pub use delivery::{Delivery, LoadSignal, LoadSink};
pub use network::ReqwestTransport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("verkko/", env!("CARGO_PKG_VERSION"));

/// Something that can load a request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and report the raw outcome
    async fn load(&self, request: Request) -> Delivery;
}
