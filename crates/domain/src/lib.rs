mod email;
mod quote;
mod reminder;
mod shared;

pub use email::{compose_reminder_email, AlertKind, ComposedEmail, SentEmail};
pub use quote::Quote;
pub use reminder::{Reminder, ReminderStatus, DUE_SOON_WINDOW_MILLIS};
pub use shared::entity::{Entity, InvalidIDError, ID};
