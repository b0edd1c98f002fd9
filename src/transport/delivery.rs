// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw load outcome reported by an underlying transport
//!
//! A transport reports on three independent channels: body data, response
//! metadata and error. Any combination may be present. Transports push
//! signals into a [`LoadSink`] and call [`LoadSink::finish`] once.

use bytes::{Bytes, BytesMut};

use crate::error::TransportError;
use crate::http::RawResponse;

/// One channel event, in the order the transport produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSignal {
    Data,
    Response,
    Error,
}

/// The three raw channels of a finished load
#[derive(Debug, Clone, Default)]
pub struct Delivery {
    pub data: Option<Bytes>,
    pub response: Option<RawResponse>,
    pub error: Option<TransportError>,
    signals: Vec<LoadSignal>,
}

impl Delivery {
    /// Build a delivery directly from the three channels
    pub fn from_parts(
        data: Option<Bytes>,
        response: Option<RawResponse>,
        error: Option<TransportError>,
    ) -> Self {
        let mut sink = LoadSink::new();
        if let Some(data) = data {
            sink.did_load(data);
        }
        if let Some(response) = response {
            sink.did_receive(response);
        }
        if let Some(error) = error {
            sink.did_fail(error);
        }
        sink.finish()
    }

    /// Signals in the order they were received
    pub fn signals(&self) -> &[LoadSignal] {
        &self.signals
    }

    /// True when no channel carries anything
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.response.is_none() && self.error.is_none()
    }
}

/// Collects load signals for one request
///
/// Data chunks accumulate. A later response or error replaces an earlier one.
#[derive(Debug, Default)]
pub struct LoadSink {
    data: Option<BytesMut>,
    response: Option<RawResponse>,
    error: Option<TransportError>,
    signals: Vec<LoadSignal>,
}

impl LoadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body bytes arrived
    pub fn did_load(&mut self, data: impl AsRef<[u8]>) {
        tracing::trace!(len = data.as_ref().len(), "Load signal: data");
        self.data
            .get_or_insert_with(BytesMut::new)
            .extend_from_slice(data.as_ref());
        self.signals.push(LoadSignal::Data);
    }

    /// Response metadata arrived
    pub fn did_receive(&mut self, response: RawResponse) {
        tracing::trace!(url = %response.url(), "Load signal: response");
        self.response = Some(response);
        self.signals.push(LoadSignal::Response);
    }

    /// The load failed
    pub fn did_fail(&mut self, error: TransportError) {
        tracing::trace!(error = %error, "Load signal: error");
        self.error = Some(error);
        self.signals.push(LoadSignal::Error);
    }

    /// Finish the load. Consumes the sink so this happens exactly once.
    pub fn finish(self) -> Delivery {
        Delivery {
            data: self.data.map(BytesMut::freeze),
            response: self.response,
            error: self.error,
            signals: self.signals,
        }
    }
}
