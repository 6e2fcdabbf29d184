// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` hands out ids, limits the number of visible toasts and
//! expires them. A queued toast only starts its timer once it is shown.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
struct Shown {
    id: NotificationId,
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Shown>,
    queue: VecDeque<(NotificationId, Notification)>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it while three are on screen.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    /// [`push`](Self::push) with an explicit clock.
    pub fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        match notification.severity() {
            Severity::Warning | Severity::Error => {
                log::warn!("notification: {}", notification.message_key());
            }
            Severity::Success | Severity::Info => {
                log::debug!("notification: {}", notification.message_key());
            }
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(Shown {
                id,
                notification,
                shown_at: now,
            });
        } else {
            self.queue.push_back((id, notification));
        }
        id
    }

    /// Close button. Returns `false` for unknown or already gone ids.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|s| s.id == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|(queued, _)| *queued == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible toast whose time is up at `now`, then fills the
    /// freed slots from the queue.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|s| {
            now.saturating_duration_since(s.shown_at) < s.notification.severity().dismiss_after()
        });
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|s| &s.notification)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Removes form error toasts once a later submission succeeds.
    pub fn clear_form_errors(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|s| !is_form_error(&s.notification));
        self.queue.retain(|(_, n)| !is_form_error(n));
        if self.visible.len() < before {
            self.promote_from_queue(Instant::now());
        }
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some((id, notification)) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(Shown {
                id,
                notification,
                shown_at: now,
            });
        }
    }
}

fn is_form_error(notification: &Notification) -> bool {
    notification.severity() == Severity::Error
        && notification.message_key().starts_with("notification-")
        && notification.message_key().ends_with("-error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn ids_are_distinct() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::success("a"));
        let b = manager.push(Notification::success("a"));
        assert_ne!(a, b);
    }

    #[test]
    fn newest_notification_is_listed_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::success("second"));
        assert_eq!(keys(&manager), vec!["second", "first"]);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = manager.push(Notification::success("visible-0"));
        for i in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        let queued = manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
        assert!(keys(&manager).contains(&"queued"));

        assert!(manager.dismiss(queued));
        assert!(!manager.dismiss(queued));
    }

    #[test]
    fn tick_at_expires_by_severity() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push_at(Notification::success("saved"), start);
        manager.push_at(Notification::error("failed"), start);

        manager.tick_at(start + Duration::from_millis(2999));
        assert_eq!(manager.visible_count(), 2);

        manager.tick_at(start + Duration::from_secs(4));
        assert_eq!(keys(&manager), vec!["failed"]);

        manager.tick_at(start + Duration::from_secs(6));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn queued_toast_is_timed_from_when_it_is_shown() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push_at(Notification::success(format!("s-{i}")), start);
        }
        manager.push_at(Notification::success("late"), start);

        let shown = start + Duration::from_secs(3);
        manager.tick_at(shown);
        assert_eq!(keys(&manager), vec!["late"]);

        manager.tick_at(shown + Duration::from_secs(2));
        assert_eq!(keys(&manager), vec!["late"]);
        manager.tick_at(shown + Duration::from_secs(3));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_form_errors_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-contact-error"));
        manager.push(Notification::error("notification-booking-error"));
        manager.push(Notification::success("notification-contact-success"));
        manager.push(Notification::warning("viewer-empty-result"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_form_errors();
        assert_eq!(
            keys(&manager),
            vec!["notification-contact-success", "viewer-empty-result"]
        );
        assert_eq!(manager.queued_count(), 0);
    }
}
