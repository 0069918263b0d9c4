mod base;
mod quote;
mod reminder;
mod sent_email;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use gpa_reminders_api_structs::dtos::*;
pub use gpa_reminders_domain::{AlertKind, ReminderStatus, ID};
use quote::QuoteClient;
pub use quote::SetQuoteInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use sent_email::SentEmailClient;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use gpa_reminders_api_structs::dtos::QuoteDTO as Quote;
pub use gpa_reminders_api_structs::dtos::ReminderDTO as Reminder;
pub use gpa_reminders_api_structs::dtos::SentEmailDTO as SentEmail;

/// GPA Reminders Server SDK
///
/// The SDK contains methods for interacting with the GPA quote reminders
/// server API.
#[derive(Clone)]
pub struct GpaSDK {
    pub quote: QuoteClient,
    pub reminder: ReminderClient,
    pub sent_email: SentEmailClient,
    pub status: StatusClient,
}

impl GpaSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let quote = QuoteClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let sent_email = SentEmailClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            quote,
            reminder,
            sent_email,
            status,
        }
    }
}
