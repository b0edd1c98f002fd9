// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! [`HttpClient`] implemented on top of a [`Transport`]

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use super::client::HttpClient;
use super::metadata::{RawResponse, ResponseMetadata};
use super::request::Request;
use super::result::HttpClientResult;
use crate::error::{Error, Result};
use crate::transport::{Delivery, ReqwestTransport, Transport, TransportConfig};

/// HTTP client delegating each GET to a transport
///
/// Holds no per-request state; create and drop freely.
#[derive(Clone)]
pub struct TransportHttpClient {
    transport: Arc<dyn Transport>,
}

impl TransportHttpClient {
    /// Create a client over a default [`ReqwestTransport`]
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a client over a [`ReqwestTransport`] with custom configuration
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::with_config(
            config,
        )?)))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl HttpClient for TransportHttpClient {
    async fn get(&self, url: &Url) -> Result<(Bytes, ResponseMetadata)> {
        let delivery = self.transport.load(Request::get(url.clone())).await;
        classify(delivery).into_result()
    }
}

/// Reduce the three raw channels to a result
///
/// An error always wins, even next to a well-formed HTTP response. Without
/// an error, anything but an HTTP response is [`Error::UnknownTransport`].
/// A missing body on an HTTP response is an empty body.
pub fn classify(delivery: Delivery) -> HttpClientResult {
    if let Some(error) = delivery.error {
        return HttpClientResult::Failure(Error::Transport(error));
    }

    match delivery.response {
        Some(RawResponse::Http(metadata)) => HttpClientResult::Success {
            body: delivery.data.unwrap_or_default(),
            metadata,
        },
        Some(RawResponse::Generic(_)) | None => HttpClientResult::Failure(Error::UnknownTransport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::harness::InterceptionHarness;
    use crate::test_support::*;

    fn make_sut(harness: &InterceptionHarness) -> TransportHttpClient {
        TransportHttpClient::with_transport(Arc::new(harness.clone()))
    }

    async fn result_for(
        data: Option<Bytes>,
        response: Option<RawResponse>,
        error: Option<TransportError>,
    ) -> Result<(Bytes, ResponseMetadata)> {
        let harness = InterceptionHarness::new();
        let _guard = harness.install_scoped();
        harness.stub(data, response, error);

        make_sut(&harness).get(&any_url()).await
    }

    async fn result_error_for(
        data: Option<Bytes>,
        response: Option<RawResponse>,
        error: Option<TransportError>,
    ) -> Error {
        match result_for(data, response, error).await {
            Ok(result) => panic!("Expected failure, got {:?}", result),
            Err(err) => err,
        }
    }

    #[test]
    fn test_classify_error_wins_over_http_response() {
        let result = classify(Delivery::from_parts(
            Some(any_data()),
            Some(any_http_response()),
            Some(any_error()),
        ));
        assert!(matches!(result, HttpClientResult::Failure(Error::Transport(_))));
    }

    #[test]
    fn test_classify_missing_response() {
        let result = classify(Delivery::from_parts(Some(any_data()), None, None));
        assert!(matches!(result, HttpClientResult::Failure(Error::UnknownTransport)));
    }

    #[tokio::test]
    async fn test_get_performs_get_request_with_url() {
        let harness = InterceptionHarness::new();
        let _guard = harness.install_scoped();
        let url = any_url();

        harness.stub(None, None, None);
        let expected = url.clone();
        harness.observe(move |request| {
            assert_eq!(request.url, expected);
            assert_eq!(request.method, reqwest::Method::GET);
        });

        let result = make_sut(&harness).get(&url).await;

        assert!(result.is_ok());
        assert_eq!(harness.captured_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_get_fails_on_request_error() {
        let error = any_error();
        let received = result_error_for(None, None, Some(error.clone())).await;

        let received = received.transport_error().unwrap();
        assert_eq!(received.code(), error.code());
        assert_eq!(received.domain(), error.domain());
    }

    #[tokio::test]
    async fn test_get_fails_on_all_invalid_representation_cases() {
        let cases = vec![
            (None, None, None),
            (None, Some(non_http_response()), None),
            (Some(any_data()), None, Some(any_error())),
            (None, Some(non_http_response()), Some(any_error())),
            (None, Some(any_http_response()), Some(any_error())),
            (Some(any_data()), Some(non_http_response()), Some(any_error())),
            (Some(any_data()), Some(any_http_response()), Some(any_error())),
            (Some(any_data()), Some(non_http_response()), None),
        ];

        for (data, response, error) in cases {
            let expects_transport = error.is_some();
            let err = result_error_for(data, response, error).await;
            if expects_transport {
                assert!(err.is_transport(), "got {:?}", err);
            }
        }
    }

    #[tokio::test]
    async fn test_non_http_response_is_unknown_transport() {
        let err = result_error_for(Some(any_data()), Some(non_http_response()), None).await;
        assert!(err.is_unknown_transport());
    }

    #[tokio::test]
    async fn test_get_without_data_returns_empty_body() {
        let response = any_http_response();
        let (body, metadata) = result_for(None, Some(response), None).await.unwrap();

        assert!(body.is_empty());
        assert_eq!(metadata.url, any_url());
        assert_eq!(metadata.status_code(), 200);
    }

    #[tokio::test]
    async fn test_get_succeeds_on_http_response_with_data() {
        let (body, metadata) = result_for(Some(any_data()), Some(any_http_response()), None)
            .await
            .unwrap();

        assert_eq!(body, any_data());
        assert_eq!(metadata.url, any_url());
        assert_eq!(metadata.status_code(), 200);
    }

    #[tokio::test]
    async fn test_callback_form_matches_awaited_form() {
        let harness = InterceptionHarness::new();
        let _guard = harness.install_scoped();

        let stubs = vec![
            (Some(any_data()), Some(any_http_response()), None),
            (None, Some(non_http_response()), None),
            (None, None, Some(any_error())),
        ];

        for (data, response, error) in stubs {
            harness.stub(data, response, error);
            let sut = Arc::new(make_sut(&harness));

            let awaited = HttpClientResult::from(sut.get(&any_url()).await);

            let (tx, rx) = tokio::sync::oneshot::channel();
            sut.get_with(
                any_url(),
                Box::new(move |result| {
                    let _ = tx.send(result);
                }),
            )
            .await
            .unwrap();
            let delivered = rx.await.unwrap();

            assert_eq!(awaited.is_success(), delivered.is_success());
            assert_eq!(
                awaited.error().map(Error::is_transport),
                delivered.error().map(Error::is_transport)
            );
            assert_eq!(awaited.body(), delivered.body());
        }
    }

    #[tokio::test]
    async fn test_client_is_released_after_call() {
        let harness = InterceptionHarness::new();
        let _guard = harness.install_scoped();
        harness.stub(None, Some(any_http_response()), None);

        let sut = Arc::new(make_sut(&harness));
        let tracker = track_for_leaks(&sut);

        let (tx, rx) = tokio::sync::oneshot::channel();
        sut.get_with(
            any_url(),
            Box::new(move |result| {
                let _ = tx.send(result.is_success());
            }),
        )
        .await
        .unwrap();

        assert!(rx.await.unwrap());
        tracker.assert_released();
    }
}
