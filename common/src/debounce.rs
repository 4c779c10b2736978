//! Debounce bookkeeping without a clock.
//!
//! The caller owns the timer: every [`Debouncer::push`] hands back a ticket,
//! the caller waits `ticket.delay_ms()` and then calls [`Debouncer::settle`].
//! Only the ticket of the most recent push settles, so a burst of pushes
//! within the delay collapses into one value, the last one, emitted once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    delay_ms: u32,
}

impl DebounceTicket {
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
        }
    }

    /// Returns the pending value if `ticket` belongs to the latest push and
    /// the value has not been taken yet.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; outstanding tickets will settle to nothing.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_settles_to_last_value_once() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.push("N");
        let second = debouncer.push("ND");
        let last = debouncer.push("NDQ");
        assert_eq!(last.delay_ms(), 300);

        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), None);
        assert_eq!(debouncer.settle(last), Some("NDQ"));
        assert_eq!(debouncer.settle(last), None);
    }

    #[test]
    fn stale_ticket_does_not_consume_newer_value() {
        let mut debouncer = Debouncer::new(50);
        let stale = debouncer.push(1);
        let fresh = debouncer.push(2);
        assert_eq!(debouncer.settle(stale), None);
        assert_eq!(debouncer.settle(fresh), Some(2));
    }

    #[test]
    fn cancel_invalidates_outstanding_tickets() {
        let mut debouncer = Debouncer::new(50);
        let ticket = debouncer.push("x");
        debouncer.cancel();
        assert_eq!(debouncer.settle(ticket), None);
    }
}
