use super::IReminderRepo;
use crate::repos::kv::{load_collection, store_collection, IKVStore};
use gpa_reminders_domain::{Reminder, ReminderStatus, ID};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

/// Key under which the reminder collection is stored, shared with the
/// historical web client.
const REMINDERS_KEY: &str = "gpa_rappels";

/// `IReminderRepo` over an `IKVStore`. Mutations take a writer lock around
/// their read-modify-write so that a poll run and an http request cannot
/// lose each others updates, reads work on a plain snapshot.
pub struct KVReminderRepo {
    store: Arc<dyn IKVStore>,
    write_lock: Mutex<()>,
}

impl KVReminderRepo {
    pub fn new(store: Arc<dyn IKVStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Vec<ReminderRaw> {
        load_collection(&*self.store, REMINDERS_KEY).await
    }

    async fn store(&self, raws: &[ReminderRaw]) -> anyhow::Result<()> {
        store_collection(&*self.store, REMINDERS_KEY, raws).await
    }
}

#[async_trait::async_trait]
impl IReminderRepo for KVReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut raws = self.load().await;
        raws.push(ReminderRaw::from_domain(reminder));
        self.store(&raws).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        self.save_all(std::slice::from_ref(reminder)).await
    }

    async fn save_all(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        if reminders.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;
        let mut raws = self.load().await;
        for reminder in reminders {
            if let Some(raw) = raws.iter_mut().find(|raw| raw.id == reminder.id) {
                *raw = ReminderRaw::from_domain(reminder);
            }
        }
        self.store(&raws).await
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        self.load()
            .await
            .into_iter()
            .find(|raw| raw.id == *reminder_id)
            .map(|raw| raw.to_domain())
    }

    async fn find_all(&self) -> Vec<Reminder> {
        self.load()
            .await
            .into_iter()
            .map(|raw| raw.to_domain())
            .collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let _guard = self.write_lock.lock().await;
        let mut raws = self.load().await;
        let pos = raws.iter().position(|raw| raw.id == *reminder_id)?;
        let deleted = raws.remove(pos);
        match self.store(&raws).await {
            Ok(_) => Some(deleted.to_domain()),
            Err(e) => {
                error!(
                    "Unable to persist the reminder collection after a delete. Error message: {}",
                    e
                );
                None
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReminderRaw {
    id: ID,
    created_at: i64,
    due_at: i64,
    status: ReminderStatus,
    notified_early: bool,
    quote_id: ID,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    last_triggered_at: Option<i64>,
}

impl ReminderRaw {
    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            created_at: reminder.created_at,
            due_at: reminder.due_at,
            status: reminder.status,
            notified_early: reminder.notified_early,
            quote_id: reminder.quote_id.clone(),
            notes: reminder.notes.clone(),
            last_triggered_at: reminder.last_triggered_at,
        }
    }

    fn to_domain(self) -> Reminder {
        Reminder {
            id: self.id,
            created_at: self.created_at,
            due_at: self.due_at,
            status: self.status,
            notified_early: self.notified_early,
            quote_id: self.quote_id,
            notes: self.notes,
            last_triggered_at: self.last_triggered_at,
        }
    }
}
