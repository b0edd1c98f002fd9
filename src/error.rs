// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for verkko
//!
//! Callers only ever see two failure kinds from a GET: the transport's own
//! error, passed through verbatim, or the [`Error::UnknownTransport`]
//! sentinel when the transport answered with something that is not HTTP.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Result type alias for verkko operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for verkko
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying transport reported a failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The underlying transport produced a response that is not HTTP-shaped
    #[error("Unknown transport error: response could not be interpreted as HTTP")]
    UnknownTransport,

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The interception harness was installed twice
    #[error("Interception harness is already installed")]
    AlreadyInstalled,
}

impl Error {
    /// Check if this error came from the underlying transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is the non-HTTP response sentinel
    pub fn is_unknown_transport(&self) -> bool {
        matches!(self, Error::UnknownTransport)
    }

    /// Get the transport error, if this is one
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// Stable error codes used by [`TransportError`]
pub mod codes {
    /// Domain of errors converted from reqwest
    pub const REQWEST_DOMAIN: &str = "reqwest";
    /// Domain of errors synthesized by the interception harness
    pub const HARNESS_DOMAIN: &str = "verkko.harness";

    pub const UNKNOWN: i64 = -1;
    pub const TIMED_OUT: i64 = -1001;
    pub const CANNOT_CONNECT: i64 = -1004;
    pub const REDIRECT: i64 = -1007;
    pub const BAD_REQUEST: i64 = -1011;
    pub const BODY: i64 = -1017;
    pub const DECODE: i64 = -1015;

    /// Harness had nothing configured to answer with
    pub const STUB_EMPTY: i64 = 1;
    /// Harness is not installed and has no passthrough transport
    pub const NO_HANDLER: i64 = 2;
}

/// Opaque error surfaced by an underlying transport.
///
/// Identified by `domain` and `code`; two errors with the same pair are the
/// same error as far as callers are concerned. Cloneable so a stubbed error
/// can be replayed for every intercepted request.
#[derive(Clone)]
pub struct TransportError {
    domain: Cow<'static, str>,
    code: i64,
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create a new transport error
    pub fn new(
        domain: impl Into<Cow<'static, str>>,
        code: i64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the lower-level cause
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Error domain
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Error code within the domain
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Human readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether `other` has the same domain and code
    pub fn same_as(&self, other: &TransportError) -> bool {
        self.domain == other.domain && self.code == other.code
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportError")
            .field("domain", &self.domain)
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} ({})", self.domain, self.code)
        } else {
            write!(f, "{} ({}): {}", self.domain, self.code, self.message)
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            codes::TIMED_OUT
        } else if err.is_connect() {
            codes::CANNOT_CONNECT
        } else if err.is_redirect() {
            codes::REDIRECT
        } else if err.is_builder() || err.is_request() {
            codes::BAD_REQUEST
        } else if err.is_body() {
            codes::BODY
        } else if err.is_decode() {
            codes::DECODE
        } else {
            codes::UNKNOWN
        };

        TransportError::new(codes::REQWEST_DOMAIN, code, err.to_string()).with_source(err)
    }
}
