// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Shared fixtures for unit tests

use std::sync::{Arc, Weak};

use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use crate::error::TransportError;
use crate::http::{GenericResponse, RawResponse, ResponseMetadata};

pub fn any_url() -> Url {
    Url::parse("https://mroca.me").unwrap()
}

pub fn any_data() -> Bytes {
    Bytes::from_static(b"any data")
}

pub fn any_error() -> TransportError {
    TransportError::new("any error", 1, "")
}

pub fn any_http_response() -> RawResponse {
    RawResponse::Http(ResponseMetadata::new(any_url(), StatusCode::OK))
}

pub fn non_http_response() -> RawResponse {
    RawResponse::Generic(GenericResponse {
        url: any_url(),
        mime_type: None,
        expected_content_length: Some(0),
    })
}

/// Weak handle asserting that an instance has been dropped
pub struct LeakTracker<T> {
    instance: Weak<T>,
}

impl<T> LeakTracker<T> {
    #[track_caller]
    pub fn assert_released(&self) {
        assert!(
            self.instance.upgrade().is_none(),
            "Instance should have been released, {} strong reference(s) left",
            self.instance.strong_count()
        );
    }
}

pub fn track_for_leaks<T>(instance: &Arc<T>) -> LeakTracker<T> {
    LeakTracker {
        instance: Arc::downgrade(instance),
    }
}

/// Route tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
