// Background directory listing so slow filesystems do not freeze the UI

use crate::domain::{Listing, ListingRequest, NavigationState};
use crate::error::{ExplorerError, Result};
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Message types for the listing worker
enum ListingMessage {
    /// List a directory for a state generation
    Load(ListingRequest),
    /// Stop the worker
    Shutdown,
}

/// Handle for sending requests to the listing worker
#[derive(Clone)]
pub struct ListingLoader {
    request_tx: mpsc::Sender<ListingMessage>,
    /// Highest generation submitted so far; anything older is superseded
    latest: Arc<AtomicU64>,
}

impl ListingLoader {
    /// Spawns the worker on the current runtime. Finished listings are sent
    /// to `result_tx`.
    pub fn new(result_tx: mpsc::UnboundedSender<Listing>) -> Self {
        let (request_tx, request_rx) = mpsc::channel(32);
        let latest = Arc::new(AtomicU64::new(0));

        let latest_clone = Arc::clone(&latest);
        tokio::spawn(async move {
            Self::worker(request_rx, latest_clone, result_tx).await;
        });

        Self { request_tx, latest }
    }

    async fn worker(
        mut request_rx: mpsc::Receiver<ListingMessage>,
        latest: Arc<AtomicU64>,
        result_tx: mpsc::UnboundedSender<Listing>,
    ) {
        while let Some(message) = request_rx.recv().await {
            match message {
                ListingMessage::Load(request) => {
                    let generation = request.generation;
                    if generation < latest.load(Ordering::Acquire) {
                        debug!("Skipping superseded listing (generation {})", generation);
                        continue;
                    }

                    let result = tokio::task::spawn_blocking(move || request.run()).await;

                    let listing = match result {
                        Ok(listing) => listing,
                        Err(e) => {
                            warn!("Listing task for generation {} failed: {}", generation, e);
                            continue;
                        }
                    };

                    // Superseded while it was running
                    if generation < latest.load(Ordering::Acquire) {
                        debug!("Dropping finished listing (generation {})", generation);
                        continue;
                    }

                    if result_tx.send(listing).is_err() {
                        break;
                    }
                }
                ListingMessage::Shutdown => break,
            }
        }
    }

    /// Queues a listing. Older queued requests become superseded.
    pub async fn submit(&self, request: ListingRequest) -> Result<()> {
        self.latest.fetch_max(request.generation, Ordering::AcqRel);
        self.request_tx
            .send(ListingMessage::Load(request))
            .await
            .map_err(|_| ExplorerError::WorkerUnavailable("listing worker shut down".to_string()))
    }

    pub async fn shutdown(&self) {
        let _ = self.request_tx.send(ListingMessage::Shutdown).await;
    }
}

/// Synchronous wrapper for non-async contexts such as the TUI loop
///
/// Owns its runtime; `submit` returns immediately and results are picked up
/// by polling.
pub struct SyncListingManager {
    loader: ListingLoader,
    results: mpsc::UnboundedReceiver<Listing>,
    runtime: tokio::runtime::Runtime,
}

impl SyncListingManager {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (result_tx, results) = mpsc::unbounded_channel();
        let loader = runtime.block_on(async { ListingLoader::new(result_tx) });

        Ok(Self {
            loader,
            results,
            runtime,
        })
    }

    pub fn submit(&self, request: ListingRequest) -> Result<()> {
        self.runtime.block_on(self.loader.submit(request))
    }

    /// Next finished listing, if any (non-blocking)
    pub fn try_recv(&mut self) -> Option<Listing> {
        self.results.try_recv().ok()
    }

    /// Waits up to `timeout` for the next finished listing
    pub fn wait_for(&mut self, timeout: Duration) -> Option<Listing> {
        let results = &mut self.results;
        self.runtime
            .block_on(async move { tokio::time::timeout(timeout, results.recv()).await })
            .ok()
            .flatten()
    }

    /// Applies every finished listing to `state`. Returns whether any was
    /// accepted.
    pub fn drain_into(&mut self, state: &mut NavigationState) -> bool {
        let mut accepted = false;
        while let Some(listing) = self.try_recv() {
            accepted |= state.apply(listing);
        }
        accepted
    }

    pub fn shutdown(&self) {
        self.runtime.block_on(self.loader.shutdown());
    }
}
