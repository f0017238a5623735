use log::{debug, warn};
use tickerwatch_market_data::Ticker;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::FileClient;

/// Handle for queueing watchlist writes on the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::UnboundedSender<Vec<Ticker>>,
}

impl WriteHandle {
    /// Queue a save. Fire-and-forget: failures are logged by the actor.
    pub fn save_tickers(&self, tickers: Vec<Ticker>) {
        if self.tx.send(tickers).is_err() {
            warn!("Watchlist writer stopped; dropping save");
        }
    }
}

/// Spawns a background task that applies watchlist saves serially, so a
/// later save can never be overtaken by an earlier one.
///
/// The task ends once every [`WriteHandle`] is dropped and the queue is
/// drained; await the returned `JoinHandle` to flush pending writes.
pub fn spawn_writer(files: FileClient) -> (WriteHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Ticker>>();

    let task = tokio::spawn(async move {
        while let Some(tickers) = rx.recv().await {
            match files.save_tickers(&tickers).await {
                Ok(()) => debug!("Saved {} ticker(s)", tickers.len()),
                Err(e) => warn!("Failed to save watchlist: {}", e),
            }
        }
    });

    (WriteHandle { tx }, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryFileStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_writes_apply_in_order() {
        let files = FileClient::new(Arc::new(InMemoryFileStore::new()));
        let (handle, task) = spawn_writer(files.clone());

        handle.save_tickers(vec![Ticker::new("AAPL")]);
        handle.save_tickers(vec![Ticker::new("AAPL"), Ticker::new("TSLA")]);
        handle.save_tickers(vec![Ticker::new("TSLA")]);
        drop(handle);
        task.await.unwrap();

        assert_eq!(
            files.load_saved_tickers().await.unwrap(),
            vec![Ticker::new("TSLA")]
        );
    }
}
