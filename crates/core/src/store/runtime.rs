use std::collections::HashMap;
use std::future::Future;

use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::AbortHandle;

use super::Environment;
use crate::app::{self, AppAction, AppState};
use crate::effects::{CancelScope, Effect, QuoteScope};
use crate::errors::{Error, Result};
use crate::search::SearchAction;
use crate::storage::write_actor::{spawn_writer, WriteHandle};
use crate::watchlist::WatchlistAction;

/// Cloneable front-end handle: send actions, observe state.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<AppAction>,
    state_rx: watch::Receiver<AppState>,
}

impl StoreHandle {
    /// Queue an action for the store.
    pub fn send(&self, action: AppAction) -> Result<()> {
        self.tx.send(action).map_err(|_| Error::StoreStopped)
    }

    /// Receiver that is notified whenever an action changes the state.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_rx.clone()
    }

    /// Latest published state.
    pub fn state(&self) -> AppState {
        self.state_rx.borrow().clone()
    }
}

/// Owns the state and runs effects. Created together with its first
/// [`StoreHandle`]; [`Store::run`] returns once every handle is dropped.
pub struct Store {
    state: AppState,
    env: Environment,
    rx: mpsc::UnboundedReceiver<AppAction>,
    /// Weak so that running effects do not keep the store alive.
    feedback: mpsc::WeakUnboundedSender<AppAction>,
    state_tx: watch::Sender<AppState>,
    in_flight: HashMap<CancelScope, AbortHandle>,
}

impl Store {
    pub fn new(env: Environment) -> (Self, StoreHandle) {
        Self::with_state(env, AppState::default())
    }

    pub fn with_state(env: Environment, state: AppState) -> (Self, StoreHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(state.clone());

        let store = Self {
            state,
            env,
            rx,
            feedback: tx.downgrade(),
            state_tx,
            in_flight: HashMap::new(),
        };
        (store, StoreHandle { tx, state_rx })
    }

    /// Process actions until every handle is gone, then cancel running
    /// effects and flush pending saves.
    pub async fn run(mut self) {
        let (writer, writer_task) = spawn_writer(self.env.files.clone());

        while let Some(action) = self.rx.recv().await {
            self.dispatch(action, &writer);
        }

        debug!("All store handles dropped; shutting down");
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
        drop(writer);
        if let Err(e) = writer_task.await {
            warn!("Watchlist writer ended abnormally: {}", e);
        }
    }

    fn dispatch(&mut self, action: AppAction, writer: &WriteHandle) {
        debug!("Action: {:?}", action);
        let effects = app::reduce(&mut self.state, action);

        let state = &self.state;
        self.state_tx.send_if_modified(|published| {
            if published == state {
                false
            } else {
                *published = state.clone();
                true
            }
        });

        for effect in effects {
            self.execute(effect, writer);
        }
    }

    fn execute(&mut self, effect: Effect, writer: &WriteHandle) {
        match effect {
            Effect::SearchTickers { query } => {
                let api = self.env.api.clone();
                let debounce = self.env.debounce;
                self.spawn_scoped(CancelScope::Search, async move {
                    tokio::time::sleep(debounce).await;
                    let result = api.search_tickers(&query, true).await;
                    AppAction::Search(SearchAction::SearchResponse { query, result })
                });
            }

            Effect::FetchQuotes { scope, symbols } => {
                let api = self.env.api.clone();
                self.spawn_scoped(scope.cancel_scope(), async move {
                    let result = api.fetch_quotes(&symbols).await;
                    match scope {
                        QuoteScope::Watchlist => {
                            AppAction::Watchlist(WatchlistAction::QuotesResponse(result))
                        }
                        QuoteScope::SearchResults => {
                            AppAction::Search(SearchAction::QuotesResponse(result))
                        }
                    }
                });
            }

            Effect::Cancel(scope) => self.cancel(scope),

            Effect::LoadSavedTickers => {
                let files = self.env.files.clone();
                let feedback = self.feedback.clone();
                tokio::spawn(async move {
                    let result = files.load_saved_tickers().await;
                    feed_back(&feedback, AppAction::SavedTickersLoaded(result));
                });
            }

            Effect::SaveTickers(tickers) => writer.save_tickers(tickers),

            Effect::OpenUrl(url) => {
                let opener = self.env.opener.clone();
                tokio::spawn(async move {
                    if let Err(e) = opener.open(url).await {
                        warn!("{}", e);
                    }
                });
            }
        }
    }

    /// Run `work` in `scope`, aborting whatever the scope was running, and
    /// feed its action back to the store.
    fn spawn_scoped<F>(&mut self, scope: CancelScope, work: F)
    where
        F: Future<Output = AppAction> + Send + 'static,
    {
        self.cancel(scope);
        let feedback = self.feedback.clone();
        let task = tokio::spawn(async move {
            let action = work.await;
            feed_back(&feedback, action);
        });
        self.in_flight.insert(scope, task.abort_handle());
    }

    fn cancel(&mut self, scope: CancelScope) {
        if let Some(handle) = self.in_flight.remove(&scope) {
            if !handle.is_finished() {
                debug!("Cancelling {:?}", scope);
            }
            handle.abort();
        }
    }
}

fn feed_back(feedback: &mpsc::WeakUnboundedSender<AppAction>, action: AppAction) {
    match feedback.upgrade() {
        Some(tx) => {
            if let Err(mpsc::error::SendError(action)) = tx.send(action) {
                debug!("Store closed its queue; dropping {:?}", action);
            }
        }
        None => debug!("Store stopped; dropping {:?}", action),
    }
}
