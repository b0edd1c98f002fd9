// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport backed by a real reqwest client

use std::time::Instant;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;

use super::config::TransportConfig;
use super::delivery::{Delivery, LoadSink};
use super::Transport;
use crate::error::{Error, Result, TransportError};
use crate::http::{RawResponse, Request, ResponseMetadata};

/// Network transport using reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get transport configuration
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn load(&self, request: Request) -> Delivery {
        let start = Instant::now();
        let mut sink = LoadSink::new();

        tracing::debug!(method = %request.method, url = %request.url, "Request");

        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.send().await {
            Ok(response) => {
                let metadata = ResponseMetadata::from_reqwest(&response);
                sink.did_receive(RawResponse::Http(metadata));

                match response.bytes().await {
                    Ok(body) => sink.did_load(body),
                    Err(err) => sink.did_fail(TransportError::from(err)),
                }
            }
            Err(err) => sink.did_fail(TransportError::from(err)),
        }

        let delivery = sink.finish();
        tracing::debug!(
            status = ?delivery.response.as_ref().and_then(|r| r.as_http()).map(|m| m.status_code()),
            failed = delivery.error.is_some(),
            time_ms = start.elapsed().as_millis() as u64,
            "Response"
        );
        delivery
    }
}
