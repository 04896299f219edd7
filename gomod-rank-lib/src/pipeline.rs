//! The three-stage extract, resolve, report pipeline
//!
//! Each stage runs as its own task and owns the items it holds. Items move between
//! stages through bounded channels, and the end of input propagates by dropping
//! senders: the extractor finishing closes the identifier queue, the resolver
//! draining it closes the record queue, and the reporter then sorts what it got.

use crate::Result;
use crate::hosting::{RepositoryRecord, ResolveSummary, Resolver};
use crate::manifest;
use crate::reports::{self, SortKey};
use ohno::IntoAppError;
use tokio::sync::mpsc;

const LOG_TARGET: &str = "  pipeline";

/// Everything a pipeline run produced.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Resolved records, already sorted.
    pub records: Vec<RepositoryRecord>,

    /// Number of identifiers the extractor produced.
    pub extracted: usize,

    /// What the resolver did with those identifiers.
    pub summary: ResolveSummary,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    resolver: Resolver,
    sort_key: SortKey,
    queue_capacity: usize,
}

impl Pipeline {
    #[must_use]
    pub fn new(resolver: Resolver, sort_key: SortKey, queue_capacity: usize) -> Self {
        Self {
            resolver,
            sort_key,
            queue_capacity: queue_capacity.max(1),
        }
    }

    /// Run all three stages over `manifest_text` and wait for them to drain.
    ///
    /// Per-identifier failures never fail the run; an error here means a stage task
    /// itself died.
    pub async fn run(&self, manifest_text: String) -> Result<PipelineOutput> {
        let (module_tx, module_rx) = mpsc::channel(self.queue_capacity);
        let (record_tx, record_rx) = mpsc::channel(self.queue_capacity);

        let extractor = tokio::spawn(async move {
            let mut extracted = 0_usize;
            for module in manifest::extract_from_str(&manifest_text) {
                log::trace!(target: LOG_TARGET, "Extracted '{module}'");
                if module_tx.send(module).await.is_err() {
                    break;
                }
                extracted += 1;
            }
            extracted
        });

        let resolver = self.resolver.clone();
        let resolver = tokio::spawn(async move { resolver.run(module_rx, record_tx).await });

        let reporter = tokio::spawn(reports::collect_sorted(record_rx, self.sort_key));

        let (extracted, summary, records) =
            tokio::try_join!(extractor, resolver, reporter).into_app_err("pipeline stage terminated abnormally")?;

        log::info!(
            target: LOG_TARGET,
            "Extracted {extracted} identifier(s): {} resolved, {} skipped, sorted by {}",
            summary.resolved,
            summary.skipped,
            self.sort_key
        );

        Ok(PipelineOutput {
            records,
            extracted,
            summary,
        })
    }
}
