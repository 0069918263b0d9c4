use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// A user facing notification. The tag deduplicates notifications for the
/// same alert, replacing an earlier one that is still visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub tag: String,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification permission has not been granted")]
    PermissionDenied,
}

/// Surface on which reminder alerts are presented to the agents. The
/// service itself has no display, deployments decide what backs this.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn request_permission(&self) -> Permission;
    async fn show(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Notifier that presents notifications on the service log, used when no
/// other surface is wired up.
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        info!(
            "Notification [{}] {}: {}",
            notification.tag, notification.title, notification.body
        );
        Ok(())
    }
}

/// Notifier backed by a plain list, used by tests to assert on what was
/// presented.
pub struct InMemoryNotifier {
    permission: Permission,
    shown: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            shown: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn shown_notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        if self.permission == Permission::Denied {
            return Err(NotificationError::PermissionDenied);
        }
        self.shown.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
