//! Ownership of the single in-flight request of a controller.

/// Identifies one issued request. Only the most recently issued token of a
/// [`RequestTracker`] may commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    active: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new active token, returning it together with the token it
    /// supersedes (if that one had not finished) so the caller can abort it.
    pub fn begin(&mut self) -> (RequestToken, Option<RequestToken>) {
        self.issued += 1;
        let token = RequestToken(self.issued);
        let superseded = self.active.replace(token);
        (token, superseded)
    }

    pub fn is_active(&self, token: RequestToken) -> bool {
        self.active == Some(token)
    }

    /// Marks `token` finished. Returns false if it was no longer active.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.is_active(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Drops the active token, returning it so the caller can abort it.
    pub fn cancel(&mut self) -> Option<RequestToken> {
        self.active.take()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_supersedes_previous() {
        let mut tracker = RequestTracker::new();
        let (first, none) = tracker.begin();
        assert_eq!(none, None);
        let (second, superseded) = tracker.begin();
        assert_eq!(superseded, Some(first));
        assert!(!tracker.is_active(first));
        assert!(tracker.is_active(second));

        assert!(!tracker.finish(first));
        assert!(tracker.finish(second));
        assert_eq!(tracker.cancel(), None);

        let (_third, superseded) = tracker.begin();
        assert_eq!(superseded, None);
    }

    #[test]
    fn cancel_clears_active() {
        let mut tracker = RequestTracker::new();
        let (token, _) = tracker.begin();
        assert_eq!(tracker.cancel(), Some(token));
        assert_eq!(tracker.cancel(), None);
        assert!(!tracker.finish(token));
    }
}
