//! Self-clearing inline message (the login error).
//!
//! Each `show` returns a fresh id. The expiry timer holds that id and calls
//! `expire(id)`; if a newer message replaced it meanwhile, the call is a no-op.

/// Identifies one `show` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeId(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransientNotice {
    message: Option<String>,
    generation: u64,
}

impl TransientNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>) -> NoticeId {
        self.generation += 1;
        self.message = Some(text.into());
        NoticeId(self.generation)
    }

    /// Clear the message if `id` is still the one on display.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        if id.0 != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_id_does_not_clear_newer_message() {
        let mut notice = TransientNotice::new();
        let first = notice.show("one");
        let second = notice.show("two");
        assert!(!notice.expire(first));
        assert_eq!(notice.message(), Some("two"));
        assert!(notice.expire(second));
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn expire_after_dismiss_is_noop() {
        let mut notice = TransientNotice::new();
        let id = notice.show("bad password");
        notice.dismiss();
        assert!(!notice.expire(id));
    }
}
