//! Session state for the advisor loop
//!
//! Exactly one completed request is held at a time. Recording a new
//! request fully replaces the previous one; there is no prediction
//! history.

use crate::classifier::Prediction;

/// One completed predict-and-render request
#[derive(Debug, Clone)]
pub struct CompletedRequest {
    /// The symptom text as submitted
    pub symptoms: String,
    /// The four predicted labels
    pub prediction: Prediction,
    /// The generated report document for this request
    pub report: Vec<u8>,
}

/// Session state: the current request (if any) and a request counter
pub struct SessionState {
    current: Option<CompletedRequest>,
    request_count: usize,
}

impl SessionState {
    /// Create empty session state
    pub fn new() -> Self {
        SessionState {
            current: None,
            request_count: 0,
        }
    }

    /// Record a completed request, replacing any previous one
    pub fn record(&mut self, request: CompletedRequest) {
        self.current = Some(request);
        self.request_count += 1;
    }

    /// The current completed request, if one exists
    ///
    /// Gates the export affordance: `/save` only works while this is
    /// Some.
    pub fn current(&self) -> Option<&CompletedRequest> {
        self.current.as_ref()
    }

    /// Number of completed requests this session
    pub fn request_count(&self) -> usize {
        self.request_count
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
