//! Destinations for fired handover requests.

use std::sync::mpsc::Sender;

use tracing::warn;

use crate::HandoverRequest;

/// Receives every fired [`HandoverRequest`], in firing order.
///
/// Submission cannot fail from the trigger's point of view; a sink that
/// loses a request must log it itself.
pub trait HandoverSink {
    fn submit(&mut self, request: HandoverRequest);
}

/// Any `FnMut(HandoverRequest)` closure is a sink.
impl<F> HandoverSink for F
where
    F: FnMut(HandoverRequest),
{
    fn submit(&mut self, request: HandoverRequest) {
        self(request)
    }
}

/// Collects requests in memory.
impl HandoverSink for Vec<HandoverRequest> {
    fn submit(&mut self, request: HandoverRequest) {
        self.push(request);
    }
}

/// Forwards requests to another thread.  A disconnected receiver drops them.
impl HandoverSink for Sender<HandoverRequest> {
    fn submit(&mut self, request: HandoverRequest) {
        if self.send(request).is_err() {
            warn!(%request, "handover receiver disconnected, request dropped");
        }
    }
}

/// Drops every request.
pub struct DiscardSink;

impl HandoverSink for DiscardSink {
    fn submit(&mut self, _request: HandoverRequest) {}
}
