//! Request execution parameters.
//!
//! [`RequestParams`] groups the static parameters that bound one upstream
//! call in [`SummarizeUseCase`](crate::use_cases::summarize::SummarizeUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounds for a single summarization call.
///
/// The upstream collaborator may take seconds per call and has no timeout of
/// its own, so every attempt is wrapped in `request_timeout`. Retries apply
/// to transient failures only and default to off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParams {
    /// Upper bound for one upstream attempt. `None` blocks indefinitely.
    pub request_timeout: Option<Duration>,
    /// Extra attempts after a transient upstream failure. Zero disables
    /// retry entirely.
    pub max_retries: usize,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(120)),
            max_retries: 0,
        }
    }
}

impl RequestParams {
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max: usize) -> Self {
        self.max_retries = max;
        self
    }
}
