use super::IKVStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// `IKVStore` over a directory on disk, one JSON file per key.
pub struct FileKVStore {
    dir: PathBuf,
}

impl FileKVStore {
    pub fn new(dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait::async_trait]
impl IKVStore for FileKVStore {
    async fn get(&self, key: &str) -> Option<String> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(payload) => Some(payload),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(
                    "Unable to read the stored value for key: {}. Error message: {}",
                    key, e
                );
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}
