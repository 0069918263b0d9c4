mod kv;

pub use kv::KVQuoteRepo;

use gpa_reminders_domain::{Quote, ID};

#[async_trait::async_trait]
pub trait IQuoteRepo: Send + Sync {
    /// Inserts the quote, replacing any stored quote with the same id
    async fn upsert(&self, quote: &Quote) -> anyhow::Result<()>;
    async fn find(&self, quote_id: &ID) -> Option<Quote>;
}
