use super::IQuoteRepo;
use crate::repos::kv::{load_collection, store_collection, IKVStore};
use gpa_reminders_domain::{Quote, ID};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

const QUOTES_KEY: &str = "gpa_devis";

pub struct KVQuoteRepo {
    store: Arc<dyn IKVStore>,
    write_lock: Mutex<()>,
}

impl KVQuoteRepo {
    pub fn new(store: Arc<dyn IKVStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Vec<QuoteRaw> {
        load_collection(&*self.store, QUOTES_KEY).await
    }
}

#[async_trait::async_trait]
impl IQuoteRepo for KVQuoteRepo {
    async fn upsert(&self, quote: &Quote) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut raws = self.load().await;
        match raws.iter_mut().find(|raw| raw.id == quote.id) {
            Some(raw) => *raw = QuoteRaw::from_domain(quote),
            None => raws.push(QuoteRaw::from_domain(quote)),
        }
        store_collection(&*self.store, QUOTES_KEY, &raws).await
    }

    async fn find(&self, quote_id: &ID) -> Option<Quote> {
        self.load()
            .await
            .into_iter()
            .find(|raw| raw.id == *quote_id)
            .map(|raw| raw.to_domain())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRaw {
    id: ID,
    client_name: String,
    vehicle_description: String,
    amount: f64,
}

impl QuoteRaw {
    fn from_domain(quote: &Quote) -> Self {
        Self {
            id: quote.id.clone(),
            client_name: quote.client_name.clone(),
            vehicle_description: quote.vehicle_description.clone(),
            amount: quote.amount,
        }
    }

    fn to_domain(self) -> Quote {
        Quote {
            id: self.id,
            client_name: self.client_name,
            vehicle_description: self.vehicle_description,
            amount: self.amount,
        }
    }
}
