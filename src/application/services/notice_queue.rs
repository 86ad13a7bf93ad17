use std::collections::VecDeque;

use tracing::warn;

use crate::domain::errors::{ApiError, AuthError};
use crate::domain::{Notice, NoticeLevel};

/// Pending notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            warn!(title = %notice.title, message = %notice.message, "Error notice raised");
        }
        self.queue.push_back(notice);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice::info(title, message));
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice::warn(title, message));
    }

    /// Records a failed API call; `fallback` is used when the server gave no detail.
    pub fn api_failure(&mut self, err: &ApiError, fallback: &str) {
        self.push(Notice::from_api_error(err, fallback));
    }

    pub fn auth_failure(&mut self, err: &AuthError, fallback: &str) {
        self.push(Notice::from_auth_error(err, fallback));
    }

    /// Removes and returns every pending notice.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queueing_order() {
        let mut queue = NoticeQueue::new();
        queue.info("1", "First");
        queue.warn("2", "Second");

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "1");
        assert_eq!(drained[1].level, NoticeLevel::Warn);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_api_failure_uses_fallback() {
        let mut queue = NoticeQueue::new();
        queue.api_failure(&ApiError::from_status(404, None), "Failed to load bookings");

        let drained = queue.drain();
        assert_eq!(drained[0].level, NoticeLevel::Error);
        assert_eq!(drained[0].message, "Failed to load bookings");
    }

    #[test]
    fn test_auth_failure_title() {
        let mut queue = NoticeQueue::new();
        queue.auth_failure(&AuthError::from(ApiError::from_status(401, None)), "Login failed");

        assert_eq!(queue.drain()[0].title, "Sign-in failed");
    }
}
