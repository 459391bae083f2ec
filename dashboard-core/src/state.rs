//! One-shot view state: the fetch starts when the holder is built and the
//! observable slot settles at most once.

use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{FetchError, Location, WeatherFetcher, WeatherSnapshot};

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Loaded(Arc<WeatherSnapshot>),
    Failed(Arc<FetchError>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Arc<WeatherSnapshot>> {
        match self {
            ViewState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Arc<FetchError>> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Holds the dashboard's view state. The fetch task is the only writer.
#[derive(Debug)]
pub struct WeatherViewModel {
    state: watch::Receiver<ViewState>,
    task: JoinHandle<()>,
}

impl WeatherViewModel {
    /// Start fetching weather for `location`.
    ///
    /// Must be called from within a Tokio runtime. Dropping the view model
    /// before the fetch completes abandons it.
    pub fn new(fetcher: Box<dyn WeatherFetcher>, location: Location) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);

        let task = tokio::spawn(async move {
            let next = match fetcher.fetch(&location).await {
                Ok(snapshot) => {
                    info!(location = %location.name, "weather loaded");
                    ViewState::Loaded(Arc::new(snapshot))
                }
                Err(err) => {
                    warn!(location = %location.name, error = %err, "weather fetch failed");
                    ViewState::Failed(Arc::new(err))
                }
            };
            tx.send_replace(next);
        });

        Self { state: rx, task }
    }

    /// Latest state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Wait until the fetch has either loaded or failed.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state.clone();
        // Err only when the fetch task went away without reporting, e.g. it
        // panicked; the slot then stays `Loading`.
        if rx.wait_for(|state| !state.is_loading()).await.is_err() {
            debug!("fetch task ended without publishing a state");
        }
        rx.borrow().clone()
    }
}

impl Drop for WeatherViewModel {
    fn drop(&mut self) {
        self.task.abort();
    }
}
