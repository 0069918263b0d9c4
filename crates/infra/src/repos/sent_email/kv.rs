use super::ISentEmailRepo;
use crate::repos::kv::{load_collection, store_collection, IKVStore};
use gpa_reminders_domain::{AlertKind, SentEmail, ID};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

const SENT_EMAILS_KEY: &str = "gpa_emails_envoyes";

pub struct KVSentEmailRepo {
    store: Arc<dyn IKVStore>,
    write_lock: Mutex<()>,
}

impl KVSentEmailRepo {
    pub fn new(store: Arc<dyn IKVStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl ISentEmailRepo for KVSentEmailRepo {
    async fn insert(&self, sent_email: &SentEmail) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut raws: Vec<SentEmailRaw> = load_collection(&*self.store, SENT_EMAILS_KEY).await;
        raws.push(SentEmailRaw::from_domain(sent_email));
        store_collection(&*self.store, SENT_EMAILS_KEY, &raws).await
    }

    async fn find_all(&self) -> Vec<SentEmail> {
        let raws: Vec<SentEmailRaw> = load_collection(&*self.store, SENT_EMAILS_KEY).await;
        raws.into_iter().map(|raw| raw.to_domain()).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentEmailRaw {
    id: ID,
    subject: String,
    body: String,
    sent_at: i64,
    reminder_id: ID,
    kind: AlertKind,
}

impl SentEmailRaw {
    fn from_domain(sent_email: &SentEmail) -> Self {
        Self {
            id: sent_email.id.clone(),
            subject: sent_email.subject.clone(),
            body: sent_email.body.clone(),
            sent_at: sent_email.sent_at,
            reminder_id: sent_email.reminder_id.clone(),
            kind: sent_email.kind,
        }
    }

    fn to_domain(self) -> SentEmail {
        SentEmail {
            id: self.id,
            subject: self.subject,
            body: self.body,
            sent_at: self.sent_at,
            reminder_id: self.reminder_id,
            kind: self.kind,
        }
    }
}
