#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub leaving: bool,
}

/// Transient toasts. Showing a new one clears whatever is still on screen, so
/// at most one is ever visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    visible: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.visible.clear();
        self.visible.push(Notification {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });

        id
    }

    /// Starts the exit animation. Returns false when `id` is no longer shown,
    /// which is the case for timers armed by an already replaced toast.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.visible.iter_mut().find(|notification| notification.id == id) {
            Some(notification) => {
                notification.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|notification| notification.id != id);
        self.visible.len() != before
    }

    pub fn current(&self) -> Option<&Notification> {
        self.visible.last()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_replaces_visible_one() {
        let mut queue = NotificationQueue::new();
        queue.show(NotificationKind::Error, "Please enter your name");
        let second = queue.show(NotificationKind::Success, "Message sent");

        assert_eq!(queue.len(), 1);
        let current = queue.current().expect("one notification is visible");
        assert_eq!(current.id, second);
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn stale_expiry_leaves_newer_notification_alone() {
        let mut queue = NotificationQueue::new();
        let first = queue.show(NotificationKind::Info, "Generating");
        let second = queue.show(NotificationKind::Info, "Done");

        assert!(!queue.begin_exit(first));
        assert!(!queue.remove(first));
        assert_eq!(queue.current().map(|notification| notification.id), Some(second));
    }

    #[test]
    fn expiry_marks_then_removes() {
        let mut queue = NotificationQueue::new();
        let id = queue.show(NotificationKind::Info, "Coming soon");

        assert!(queue.begin_exit(id));
        assert!(queue.current().is_some_and(|notification| notification.leaving));
        assert!(queue.remove(id));
        assert!(queue.is_empty());
        assert!(!queue.remove(id));
    }

    #[test]
    fn kinds_map_to_icons() {
        assert_eq!(NotificationKind::Success.icon(), "fa-check-circle");
        assert_eq!(NotificationKind::Error.icon(), "fa-exclamation-circle");
        assert_eq!(NotificationKind::Info.icon(), "fa-info-circle");
        assert_eq!(NotificationKind::Info.as_str(), "info");
    }
}
