//! State machine behind the stream list screen.
//!
//! `Idle → Loading → {Success, Error}`; calling [`MainViewModel::fetch_streams`]
//! again from a terminal state starts a new attempt, which is how retry
//! works. A new call aborts the collection still in flight, and a
//! generation counter keeps a late write from the aborted attempt out of
//! the state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::StreamExt;
use qsstreams::GetStreamsUseCase;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::main_state::MainUiState;

pub struct MainViewModel {
    use_case: GetStreamsUseCase,
    state_tx: Arc<watch::Sender<MainUiState>>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl MainViewModel {
    pub fn new(use_case: GetStreamsUseCase) -> Self {
        let (state_tx, _) = watch::channel(MainUiState::Idle);
        Self {
            use_case,
            state_tx: Arc::new(state_tx),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Current state, readable at any time.
    pub fn ui_state(&self) -> MainUiState {
        self.state_tx.borrow().clone()
    }

    /// Receiver starting at the current state.
    pub fn subscribe(&self) -> watch::Receiver<MainUiState> {
        self.state_tx.subscribe()
    }

    /// Starts a fetch attempt, cancelling the previous one if still running.
    /// Must be called from within a tokio runtime.
    pub fn fetch_streams(&self) {
        let mut in_flight = self.in_flight.lock().expect("Fetch mutex poisoned");
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                debug!("Cancelling in-flight fetch");
            }
            previous.abort();
        }

        let attempt = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let state_tx = self.state_tx.clone();
        let mut states = self.use_case.invoke();

        info!(attempt, "Fetching streams");
        *in_flight = Some(tokio::spawn(async move {
            while let Some(result) = states.next().await {
                let next = MainUiState::from(result);
                state_tx.send_if_modified(|current| {
                    if generation.load(Ordering::SeqCst) != attempt {
                        return false;
                    }
                    *current = next;
                    true
                });
            }
        }));
    }

    /// True while a fetch attempt is still being collected.
    pub fn is_fetching(&self) -> bool {
        self.in_flight
            .lock()
            .expect("Fetch mutex poisoned")
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for MainViewModel {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            if let Some(task) = in_flight.take() {
                task.abort();
            }
        }
    }
}
