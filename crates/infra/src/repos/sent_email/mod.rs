mod kv;

pub use kv::KVSentEmailRepo;

use gpa_reminders_domain::SentEmail;

#[async_trait::async_trait]
pub trait ISentEmailRepo: Send + Sync {
    async fn insert(&self, sent_email: &SentEmail) -> anyhow::Result<()>;
    /// All recorded emails in the order they were handed off
    async fn find_all(&self) -> Vec<SentEmail>;
}
