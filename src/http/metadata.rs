// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response metadata types

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Version};
use url::Url;

use super::headers;

/// The non-body part of an HTTP response
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// URL the response was loaded from (after redirects)
    pub url: Url,
    /// Response status code
    pub status: StatusCode,
    /// Response headers, names are case-insensitive
    pub headers: HeaderMap,
    /// HTTP version, if the transport reported one
    pub version: Option<Version>,
}

impl ResponseMetadata {
    /// Create metadata with no headers
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self {
            url,
            status,
            headers: HeaderMap::new(),
            version: None,
        }
    }

    /// Capture the metadata of a reqwest response
    pub fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
            version: Some(response.version()),
        }
    }

    /// Set a header
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Set the HTTP version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(headers::CONTENT_TYPE)
    }

    /// Get content length
    pub fn content_length(&self) -> Option<u64> {
        self.header(headers::CONTENT_LENGTH).and_then(|v| v.parse().ok())
    }
}

/// A response without a status line or header fields
#[derive(Debug, Clone)]
pub struct GenericResponse {
    pub url: Url,
    pub mime_type: Option<String>,
    pub expected_content_length: Option<u64>,
}

impl GenericResponse {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            mime_type: None,
            expected_content_length: None,
        }
    }
}

/// Whatever an underlying transport put on its metadata channel
#[derive(Debug, Clone)]
pub enum RawResponse {
    /// HTTP-shaped response with status and headers
    Http(ResponseMetadata),
    /// Response that cannot be interpreted as HTTP
    Generic(GenericResponse),
}

impl RawResponse {
    /// URL the response refers to
    pub fn url(&self) -> &Url {
        match self {
            RawResponse::Http(metadata) => &metadata.url,
            RawResponse::Generic(generic) => &generic.url,
        }
    }

    /// The HTTP metadata, if this response is HTTP-shaped
    pub fn as_http(&self) -> Option<&ResponseMetadata> {
        match self {
            RawResponse::Http(metadata) => Some(metadata),
            RawResponse::Generic(_) => None,
        }
    }

    /// Convert into the HTTP metadata, if this response is HTTP-shaped
    pub fn into_http(self) -> Option<ResponseMetadata> {
        match self {
            RawResponse::Http(metadata) => Some(metadata),
            RawResponse::Generic(_) => None,
        }
    }
}

impl From<ResponseMetadata> for RawResponse {
    fn from(metadata: ResponseMetadata) -> Self {
        RawResponse::Http(metadata)
    }
}

impl From<GenericResponse> for RawResponse {
    fn from(generic: GenericResponse) -> Self {
        RawResponse::Generic(generic)
    }
}
