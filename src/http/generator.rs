use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, error};

use super::dispatcher::Dispatcher;

pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cap on concurrent outbound requests across all batches.
pub(crate) const MAX_IN_FLIGHT: usize = 100;

/// Fixed-rate batch driver.
///
/// Every tick it draws `rate` (endpoint, destination) pairs uniformly at
/// random with replacement, fans the requests out concurrently, waits for
/// the whole batch to settle, then sleeps one tick period. The rate is
/// constant for the process lifetime; ticks are sequential, not wall-clock
/// aligned, so an overrunning batch delays the next one rather than being
/// skipped or merged.
pub struct RateController {
    dispatcher: Arc<Dispatcher>,
    destinations: Arc<Vec<String>>,
    rate: usize,
    in_flight: Arc<Semaphore>,
}

impl RateController {
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>, destinations: Vec<String>, rate: usize) -> Self {
        Self {
            dispatcher,
            destinations: Arc::new(destinations),
            rate,
            in_flight: Arc::new(Semaphore::new(MAX_IN_FLIGHT)),
        }
    }

    /// Run ticks forever; only process termination stops the loop.
    pub async fn run(self) {
        loop {
            self.run_tick().await;
            sleep(TICK_PERIOD).await;
        }
    }

    /// Dispatch one batch and wait for every request in it to settle.
    pub async fn run_tick(&self) {
        let mut handles = Vec::with_capacity(self.rate);

        {
            // Draws are independent per slot; duplicate pairs within a batch
            // are expected.
            let mut rng = rand::thread_rng();
            for _ in 0..self.rate {
                let Some(proxy) = self.dispatcher.clients().choose(&mut rng).cloned() else {
                    continue;
                };
                let Some(destination) = self.destinations.choose(&mut rng).cloned() else {
                    continue;
                };

                let dispatcher = Arc::clone(&self.dispatcher);
                let in_flight = Arc::clone(&self.in_flight);
                handles.push(tokio::spawn(async move {
                    let Ok(_permit) = in_flight.acquire_owned().await else {
                        return;
                    };
                    dispatcher.dispatch(&proxy, &destination).await;
                }));
            }
        }

        let batch = handles.len();
        for handle in handles {
            // A failed dispatch task must not break the batch join barrier.
            if let Err(err) = handle.await {
                error!("Dispatch task failed: {}", err);
            }
        }
        debug!("Batch of {} requests settled", batch);
    }
}
