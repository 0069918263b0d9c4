use gpa_reminders_domain::{AlertKind, SentEmail, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SentEmailDTO {
    pub id: ID,
    pub subject: String,
    pub body: String,
    pub sent_at: i64,
    pub reminder_id: ID,
    pub kind: AlertKind,
}

impl SentEmailDTO {
    pub fn new(sent_email: SentEmail) -> Self {
        Self {
            id: sent_email.id.clone(),
            subject: sent_email.subject,
            body: sent_email.body,
            sent_at: sent_email.sent_at,
            reminder_id: sent_email.reminder_id.clone(),
            kind: sent_email.kind,
        }
    }
}
