//! Transient status notices.

use std::time::{Duration, Instant};

/// How long a notice stays on the status line.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A short message shown in place of the key hints until it expires.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now + NOTICE_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let now = Instant::now();
        let notice = Notice::new(NoticeKind::Info, "Copied", now);
        assert!(!notice.is_expired(now));
        assert!(!notice.is_expired(now + Duration::from_secs(1)));
        assert!(notice.is_expired(now + NOTICE_DURATION));
    }
}
