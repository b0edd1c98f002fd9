// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Two-case outcome of a GET

use bytes::Bytes;

use super::metadata::ResponseMetadata;
use crate::error::{Error, Result};

/// Outcome of a single GET
#[derive(Debug)]
pub enum HttpClientResult {
    /// Body (possibly empty) and the response metadata
    Success {
        body: Bytes,
        metadata: ResponseMetadata,
    },
    /// The request failed
    Failure(Error),
}

impl HttpClientResult {
    pub fn is_success(&self) -> bool {
        matches!(self, HttpClientResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, HttpClientResult::Failure(_))
    }

    /// Body of a successful result
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            HttpClientResult::Success { body, .. } => Some(body),
            HttpClientResult::Failure(_) => None,
        }
    }

    /// Metadata of a successful result
    pub fn metadata(&self) -> Option<&ResponseMetadata> {
        match self {
            HttpClientResult::Success { metadata, .. } => Some(metadata),
            HttpClientResult::Failure(_) => None,
        }
    }

    /// Error of a failed result
    pub fn error(&self) -> Option<&Error> {
        match self {
            HttpClientResult::Success { .. } => None,
            HttpClientResult::Failure(err) => Some(err),
        }
    }

    /// Convert into a standard result
    pub fn into_result(self) -> Result<(Bytes, ResponseMetadata)> {
        match self {
            HttpClientResult::Success { body, metadata } => Ok((body, metadata)),
            HttpClientResult::Failure(err) => Err(err),
        }
    }
}

impl From<Result<(Bytes, ResponseMetadata)>> for HttpClientResult {
    fn from(result: Result<(Bytes, ResponseMetadata)>) -> Self {
        match result {
            Ok((body, metadata)) => HttpClientResult::Success { body, metadata },
            Err(err) => HttpClientResult::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use url::Url;

    #[test]
    fn test_success_accessors() {
        let metadata =
            ResponseMetadata::new(Url::parse("https://example.com").unwrap(), StatusCode::OK);
        let result = HttpClientResult::Success {
            body: Bytes::from_static(b"hello"),
            metadata,
        };

        assert!(result.is_success());
        assert_eq!(result.body().map(|b| &b[..]), Some(&b"hello"[..]));
        assert_eq!(result.metadata().map(|m| m.status_code()), Some(200));
        assert!(result.error().is_none());

        let (body, metadata) = result.into_result().unwrap();
        assert_eq!(body, Bytes::from_static(b"hello"));
        assert_eq!(metadata.status, StatusCode::OK);
    }

    #[test]
    fn test_failure_round_trip() {
        let result = HttpClientResult::from(Err(Error::UnknownTransport));
        assert!(result.is_failure());
        assert!(result.body().is_none());
        assert!(matches!(result.into_result(), Err(Error::UnknownTransport)));
    }
}
