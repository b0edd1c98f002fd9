// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! The client contract, the transport-backed implementation and the result
//! and metadata types it produces.

mod adapter;
mod client;
mod metadata;
mod request;
mod result;

pub use adapter::{classify, TransportHttpClient};
pub use client::{Completion, HttpClient};
pub use metadata::{GenericResponse, RawResponse, ResponseMetadata};
pub use request::Request;
pub use result::HttpClientResult;

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_ENCODING: &str = "accept-encoding";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const CONTENT_TYPE: &str = "content-type";
}
