use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tickerwatch_market_data::Ticker;

use super::{FileStore, StorageError};
use crate::constants::SAVED_TICKERS_FILE;

/// JSON persistence on top of a [`FileStore`].
#[derive(Clone)]
pub struct FileClient {
    store: Arc<dyn FileStore>,
}

impl FileClient {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Load and decode a JSON file.
    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StorageError> {
        let data = self.store.load(name).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Encode a value as JSON and overwrite the file.
    pub async fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let data = serde_json::to_vec(value)?;
        self.store.save(name, data).await
    }

    /// The persisted watchlist.
    pub async fn load_saved_tickers(&self) -> Result<Vec<Ticker>, StorageError> {
        self.load(SAVED_TICKERS_FILE).await
    }

    /// Persist the watchlist, replacing the previous list.
    pub async fn save_tickers(&self, tickers: &[Ticker]) -> Result<(), StorageError> {
        self.save(SAVED_TICKERS_FILE, tickers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryFileStore;

    #[tokio::test]
    async fn test_saved_tickers_roundtrip() {
        let memory = InMemoryFileStore::new();
        let client = FileClient::new(Arc::new(memory.clone()));
        let tickers = vec![
            Ticker::new("AAPL").with_shortname("Apple Inc."),
            Ticker::new("TSLA"),
        ];

        client.save_tickers(&tickers).await.unwrap();

        assert_eq!(client.load_saved_tickers().await.unwrap(), tickers);
        assert_eq!(
            memory.contents(SAVED_TICKERS_FILE).unwrap(),
            br#"[{"symbol":"AAPL","shortname":"Apple Inc."},{"symbol":"TSLA"}]"#.to_vec()
        );
    }

    #[tokio::test]
    async fn test_load_missing_watchlist() {
        let client = FileClient::new(Arc::new(InMemoryFileStore::new()));
        assert!(matches!(
            client.load_saved_tickers().await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_load_corrupt_watchlist() {
        let memory = InMemoryFileStore::new();
        memory
            .save(SAVED_TICKERS_FILE, b"{not json".to_vec())
            .await
            .unwrap();
        let client = FileClient::new(Arc::new(memory));

        assert!(matches!(
            client.load_saved_tickers().await,
            Err(StorageError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_generic_load_save() {
        let client = FileClient::new(Arc::new(InMemoryFileStore::new()));
        client.save("numbers", &vec![1u32, 2, 3]).await.unwrap();
        let numbers: Vec<u32> = client.load("numbers").await.unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
