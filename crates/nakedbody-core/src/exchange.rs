//! Captured request/response pairs.

use crate::message::{Direction, HttpMessage};

/// One proxied transaction. Either side may be missing (e.g. a request that
/// never got a response).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    pub request: Option<HttpMessage>,
    pub response: Option<HttpMessage>,
}

impl Exchange {
    pub fn new(request: Option<HttpMessage>, response: Option<HttpMessage>) -> Self {
        Self { request, response }
    }

    /// The message on `direction`, if captured.
    pub fn message(&self, direction: Direction) -> Option<&HttpMessage> {
        match direction {
            Direction::Request => self.request.as_ref(),
            Direction::Response => self.response.as_ref(),
        }
    }
}
