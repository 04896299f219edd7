use super::{Client, RepoSlug, RepositoryRecord};
use crate::Result;
use crate::manifest::ModulePath;
use core::ops::AddAssign;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinSet;

const LOG_TARGET: &str = "   hosting";

type SharedQueue = Arc<Mutex<Receiver<ModulePath>>>;

/// Counts of what happened to the identifiers a resolver consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Lookups that produced a record.
    pub resolved: usize,

    /// Lookups that failed and were dropped after logging a warning.
    pub skipped: usize,
}

impl AddAssign for ResolveSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.resolved += rhs.resolved;
        self.skipped += rhs.skipped;
    }
}

/// Turns module identifiers into repository records using a fixed pool of workers.
///
/// All workers pull from the same identifier queue and push into the same record
/// queue. Each worker handles one identifier at a time, so with a single worker the
/// records come out in the order the identifiers went in. With more workers the
/// output order follows network latency.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Arc<Client>,
    workers: usize,
}

impl Resolver {
    /// Create a resolver with `workers` concurrent lookups (at least one).
    #[must_use]
    pub fn new(client: Client, workers: usize) -> Self {
        Self {
            client: Arc::new(client),
            workers: workers.max(1),
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Resolve every identifier received on `modules`, sending successes to `records`.
    ///
    /// Returns once the identifier queue is closed and drained. The record queue
    /// closes when this returns, since every worker's sender has been dropped by then.
    pub async fn run(&self, modules: Receiver<ModulePath>, records: Sender<RepositoryRecord>) -> ResolveSummary {
        let queue: SharedQueue = Arc::new(Mutex::new(modules));
        let mut workers = JoinSet::new();

        for index in 0..self.workers {
            let _ = workers.spawn(worker(index, Arc::clone(&self.client), Arc::clone(&queue), records.clone()));
        }

        drop(records);

        let mut summary = ResolveSummary::default();
        while let Some(outcome) = workers.join_next().await {
            match outcome {
                Ok(worker_summary) => summary += worker_summary,
                Err(e) => log::error!(target: LOG_TARGET, "Resolver worker terminated abnormally: {e}"),
            }
        }

        summary
    }
}

async fn worker(index: usize, client: Arc<Client>, queue: SharedQueue, records: Sender<RepositoryRecord>) -> ResolveSummary {
    let mut summary = ResolveSummary::default();

    while let Some(module) = next_module(&queue).await {
        match resolve(&client, &module).await {
            Ok(record) => {
                if records.send(record).await.is_err() {
                    log::debug!(target: LOG_TARGET, "Worker {index}: record queue closed, stopping");
                    break;
                }
                summary.resolved += 1;
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Skipping '{module}': {e:#}");
                summary.skipped += 1;
            }
        }
    }

    log::trace!(target: LOG_TARGET, "Worker {index} finished: {summary:?}");
    summary
}

/// Take the next identifier, holding the queue lock only while waiting for it.
async fn next_module(queue: &SharedQueue) -> Option<ModulePath> {
    queue.lock().await.recv().await
}

async fn resolve(client: &Client, module: &ModulePath) -> Result<RepositoryRecord> {
    let slug = RepoSlug::from_module(module)?;
    client.get_repository(&slug).await
}
