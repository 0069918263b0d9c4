mod mailer;
mod notifier;

pub use mailer::{EmailDelivery, EmailRelayError, Mailer, OutgoingEmail};
pub use notifier::{
    INotifier, InMemoryNotifier, LogNotifier, Notification, NotificationError, Permission,
};
