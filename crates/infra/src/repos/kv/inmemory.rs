use super::IKVStore;
use std::collections::HashMap;

pub struct InMemoryKVStore {
    values: std::sync::Mutex<HashMap<String, String>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self {
            values: std::sync::Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKVStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKVStore for InMemoryKVStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
