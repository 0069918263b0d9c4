use gpa_reminders_domain::{Reminder, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub created_at: i64,
    pub due_at: i64,
    pub status: ReminderStatus,
    pub notified_early: bool,
    pub quote_id: ID,
    pub notes: Option<String>,
    pub last_triggered_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            created_at: reminder.created_at,
            due_at: reminder.due_at,
            status: reminder.status,
            notified_early: reminder.notified_early,
            quote_id: reminder.quote_id.clone(),
            notes: reminder.notes,
            last_triggered_at: reminder.last_triggered_at,
        }
    }
}
