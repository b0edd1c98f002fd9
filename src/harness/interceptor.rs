// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interception harness
//!
//! A [`Transport`] that, while installed, answers every request from a
//! [`StubConfiguration`] or hands it to a request observer instead of going
//! to the network. Inject it into [`crate::http::TransportHttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use reqwest::StatusCode;

use super::stub::StubConfiguration;
use crate::error::{codes, Error, Result, TransportError};
use crate::http::{RawResponse, Request, ResponseMetadata};
use crate::transport::{Delivery, LoadSink, Transport};

/// Observer callback type
pub type RequestObserver = Arc<dyn Fn(&Request) + Send + Sync>;

lazy_static! {
    static ref SHARED: InterceptionHarness = InterceptionHarness::new();
}

/// Process-wide harness for code that cannot have one injected
pub fn shared() -> &'static InterceptionHarness {
    &SHARED
}

#[derive(Default)]
struct HarnessState {
    installed: bool,
    stub: Option<StubConfiguration>,
    observer: Option<RequestObserver>,
    captured: Vec<Request>,
}

impl HarnessState {
    fn reset(&mut self) {
        self.stub = None;
        self.observer = None;
        self.captured.clear();
    }
}

/// Swappable transport handler for tests
///
/// Clones share state. While uninstalled, requests go to the passthrough
/// transport, or fail if there is none.
#[derive(Clone, Default)]
pub struct InterceptionHarness {
    state: Arc<Mutex<HarnessState>>,
    passthrough: Option<Arc<dyn Transport>>,
}

impl InterceptionHarness {
    /// Create an uninstalled harness with no passthrough
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an uninstalled harness forwarding to `transport` while uninstalled
    pub fn with_passthrough(transport: Arc<dyn Transport>) -> Self {
        Self {
            state: Arc::default(),
            passthrough: Some(transport),
        }
    }

    /// Start intercepting requests
    ///
    /// # Panics
    ///
    /// Panics if the harness is already installed.
    #[track_caller]
    pub fn install(&self) {
        if let Err(err) = self.try_install() {
            panic!("{}", err);
        }
    }

    /// Start intercepting requests, failing if already installed
    pub fn try_install(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.installed {
            return Err(Error::AlreadyInstalled);
        }
        state.installed = true;
        tracing::debug!("Interception harness installed");
        Ok(())
    }

    /// Install and uninstall again when the guard is dropped
    #[track_caller]
    pub fn install_scoped(&self) -> InstallGuard {
        self.install();
        InstallGuard {
            harness: self.clone(),
        }
    }

    /// Stop intercepting and forget the stub, observer and captured requests
    pub fn uninstall(&self) {
        let mut state = self.state.lock();
        if state.installed {
            tracing::debug!("Interception harness uninstalled");
        } else {
            tracing::debug!("Interception harness reset while not installed");
        }
        state.installed = false;
        state.reset();
    }

    pub fn is_installed(&self) -> bool {
        self.state.lock().installed
    }

    /// Answer subsequent requests with these channels
    pub fn stub(
        &self,
        data: Option<Bytes>,
        response: Option<RawResponse>,
        error: Option<TransportError>,
    ) {
        self.configure(StubConfiguration {
            data,
            response,
            error,
        });
    }

    /// Answer subsequent requests with `stub`
    pub fn configure(&self, stub: StubConfiguration) {
        self.state.lock().stub = Some(stub);
    }

    /// Hand subsequent requests to `observer`. Takes precedence over the stub.
    pub fn observe<F>(&self, observer: F)
    where
        F: Fn(&Request) + Send + Sync + 'static,
    {
        self.state.lock().observer = Some(Arc::new(observer));
    }

    /// Requests intercepted since install
    pub fn captured_requests(&self) -> Vec<Request> {
        self.state.lock().captured.clone()
    }

    /// Produce the outcome for one intercepted request
    pub fn intercept(&self, request: &Request) -> Delivery {
        let (observer, stub) = {
            let mut state = self.state.lock();
            state.captured.push(request.clone());
            (state.observer.clone(), state.stub.clone())
        };

        tracing::debug!(method = %request.method, url = %request.url, "Intercepted request");

        let mut sink = LoadSink::new();

        if let Some(observer) = observer {
            observer(request);
            sink.did_receive(RawResponse::Http(ResponseMetadata::new(
                request.url.clone(),
                StatusCode::OK,
            )));
            return sink.finish();
        }

        let filled = stub.map(|stub| stub.replay(&mut sink)).unwrap_or(false);
        if !filled {
            tracing::warn!(url = %request.url, "No stub configured, failing request");
            sink.did_fail(TransportError::new(
                codes::HARNESS_DOMAIN,
                codes::STUB_EMPTY,
                "no stubbed response configured",
            ));
        }

        sink.finish()
    }
}

#[async_trait]
impl Transport for InterceptionHarness {
    async fn load(&self, request: Request) -> Delivery {
        if self.is_installed() {
            return self.intercept(&request);
        }

        match self.passthrough {
            Some(ref transport) => transport.load(request).await,
            None => {
                let mut sink = LoadSink::new();
                sink.did_fail(TransportError::new(
                    codes::HARNESS_DOMAIN,
                    codes::NO_HANDLER,
                    "no transport handler registered",
                ));
                sink.finish()
            }
        }
    }
}

/// Uninstalls the harness when dropped
#[must_use = "the harness is uninstalled as soon as the guard is dropped"]
pub struct InstallGuard {
    harness: InterceptionHarness,
}

impl InstallGuard {
    pub fn harness(&self) -> &InterceptionHarness {
        &self.harness
    }
}

impl Drop for InstallGuard {
    fn drop(&mut self) {
        self.harness.uninstall();
    }
}
