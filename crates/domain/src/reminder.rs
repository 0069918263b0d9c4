use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// How long before its due date a `Reminder` is considered to be due soon
/// and worth a pre-notification.
pub const DUE_SOON_WINDOW_MILLIS: i64 = 15 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Scheduled,
    Triggered,
}

/// A `Reminder` is a scheduled follow-up on an insurance `Quote`. It stays
/// `Scheduled` until its due date passes, at which point a poll run fires
/// the configured alerts exactly once and marks it `Triggered`.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ID,
    /// Timestamp in millis at which this `Reminder` was created
    pub created_at: i64,
    /// Timestamp in millis at which this `Reminder` is due
    pub due_at: i64,
    pub status: ReminderStatus,
    /// Whether the pre-notification for the due soon window has been sent
    pub notified_early: bool,
    /// Id of the `Quote` this `Reminder` follows up on. The quote is not
    /// required to exist.
    pub quote_id: ID,
    pub notes: Option<String>,
    /// Timestamp in millis of the last transition to `Triggered`
    pub last_triggered_at: Option<i64>,
}

impl Reminder {
    pub fn new(due_at: i64, quote_id: ID, notes: Option<String>, now: i64) -> Self {
        Self {
            id: ID::from_timestamp("rappel", now),
            created_at: now,
            due_at,
            status: ReminderStatus::Scheduled,
            notified_early: false,
            quote_id,
            notes,
            last_triggered_at: None,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.status == ReminderStatus::Scheduled && self.due_at <= now
    }

    pub fn is_due_soon(&self, now: i64) -> bool {
        self.status == ReminderStatus::Scheduled
            && !self.notified_early
            && now < self.due_at
            && self.due_at <= now + DUE_SOON_WINDOW_MILLIS
    }

    pub fn mark_notified_early(&mut self) {
        self.notified_early = true;
    }

    pub fn trigger(&mut self, now: i64) {
        self.status = ReminderStatus::Triggered;
        self.last_triggered_at = Some(now);
    }

    /// Rearms this `Reminder` with a new due date. The id and creation
    /// timestamp are kept, everything related to previous alerts is reset.
    pub fn reschedule(&mut self, due_at: i64, notes: Option<String>) {
        self.due_at = due_at;
        self.notes = notes;
        self.status = ReminderStatus::Scheduled;
        self.notified_early = false;
        self.last_triggered_at = None;
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
