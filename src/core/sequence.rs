//! Request sequence numbers.
//!
//! A view issues a [`RequestTicket`] per request and applies a response only
//! if its ticket is still the latest one. Slow responses to superseded
//! requests are dropped instead of overwriting newer state.

/// Sequence number of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic per-view request counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a ticket newer than every ticket issued before.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
