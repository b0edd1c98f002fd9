// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Canned outcome for intercepted requests

use bytes::Bytes;

use crate::error::TransportError;
use crate::http::RawResponse;
use crate::transport::LoadSink;

/// What the harness answers with. Each channel is independent.
#[derive(Debug, Clone, Default)]
pub struct StubConfiguration {
    pub data: Option<Bytes>,
    pub response: Option<RawResponse>,
    pub error: Option<TransportError>,
}

impl StubConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body channel
    pub fn data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the response channel
    pub fn response(mut self, response: impl Into<RawResponse>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Set the error channel
    pub fn error(mut self, error: TransportError) -> Self {
        self.error = Some(error);
        self
    }

    /// True when no channel is set
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.response.is_none() && self.error.is_none()
    }

    /// Signal every present channel, data first, then response, then error.
    /// Returns false when there was nothing to signal.
    pub(crate) fn replay(&self, sink: &mut LoadSink) -> bool {
        let mut filled = false;

        if let Some(ref data) = self.data {
            filled = true;
            sink.did_load(data);
        }

        if let Some(ref response) = self.response {
            filled = true;
            sink.did_receive(response.clone());
        }

        if let Some(ref error) = self.error {
            filled = true;
            sink.did_fail(error.clone());
        }

        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::transport::LoadSignal;

    #[test]
    fn test_replay_order() {
        let stub = StubConfiguration::new()
            .error(any_error())
            .response(any_http_response())
            .data(any_data());

        let mut sink = LoadSink::new();
        assert!(stub.replay(&mut sink));

        let delivery = sink.finish();
        assert_eq!(
            delivery.signals(),
            &[LoadSignal::Data, LoadSignal::Response, LoadSignal::Error]
        );
    }

    #[test]
    fn test_replay_empty() {
        let stub = StubConfiguration::new();
        assert!(stub.is_empty());

        let mut sink = LoadSink::new();
        assert!(!stub.replay(&mut sink));
        assert!(sink.finish().is_empty());
    }
}
