mod kv;
mod quote;
mod reminder;
mod sent_email;

pub use kv::{FileKVStore, IKVStore, InMemoryKVStore};
pub use quote::IQuoteRepo;
use quote::KVQuoteRepo;
pub use reminder::IReminderRepo;
use reminder::KVReminderRepo;
pub use sent_email::ISentEmailRepo;
use sent_email::KVSentEmailRepo;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub quote_repo: Arc<dyn IQuoteRepo>,
    pub sent_email_repo: Arc<dyn ISentEmailRepo>,
}

impl Repos {
    /// Repos persisted to one file per collection under `dir`
    pub fn create_file(dir: &Path) -> anyhow::Result<Self> {
        let store: Arc<dyn IKVStore> = Arc::new(FileKVStore::new(dir)?);
        Ok(Self::create_kv(store))
    }

    pub fn create_inmemory() -> Self {
        Self::create_kv(Arc::new(InMemoryKVStore::new()))
    }

    fn create_kv(store: Arc<dyn IKVStore>) -> Self {
        Self {
            reminder_repo: Arc::new(KVReminderRepo::new(store.clone())),
            quote_repo: Arc::new(KVQuoteRepo::new(store.clone())),
            sent_email_repo: Arc::new(KVSentEmailRepo::new(store)),
        }
    }
}
