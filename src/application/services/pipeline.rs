// src/application/services/pipeline.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info_span, warn};

use crate::{
    application::{
        ApplicationResult,
        ports::time::Clock,
        security::{current_security_state, with_security_state},
    },
    domain::{
        item::ItemId,
        publishing::{
            PublishChildAction, PublishItemContext, PublishItemResult, PublishOperation,
            PublishOptions,
        },
    },
};

/// One step of the per-item publish pipeline.
#[async_trait]
pub trait PublishItemProcessor: Send + Sync {
    fn name(&self) -> &'static str;
    async fn process(&self, context: &mut PublishItemContext) -> ApplicationResult<()>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ItemOutcome {
    Completed {
        item_id: ItemId,
        result: PublishItemResult,
    },
    Failed {
        item_id: ItemId,
        error: String,
    },
}

impl ItemOutcome {
    pub fn item_id(&self) -> ItemId {
        match self {
            ItemOutcome::Completed { item_id, .. } | ItemOutcome::Failed { item_id, .. } => {
                *item_id
            }
        }
    }

    pub fn operation(&self) -> Option<PublishOperation> {
        match self {
            ItemOutcome::Completed { result, .. } => Some(result.operation),
            ItemOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub published: usize,
    pub skipped: usize,
    pub failed: usize,
    pub items: Vec<ItemOutcome>,
}

pub struct PublishItemPipeline {
    processors: Vec<Arc<dyn PublishItemProcessor>>,
    clock: Arc<dyn Clock>,
}

impl PublishItemPipeline {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            processors: Vec::new(),
            clock,
        }
    }

    pub fn with_processor(mut self, processor: Arc<dyn PublishItemProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    /// Runs the processors for one item, stopping at the first abort.
    pub async fn run(
        &self,
        mut context: PublishItemContext,
    ) -> ApplicationResult<PublishItemResult> {
        for processor in &self.processors {
            processor.process(&mut context).await?;
            if context.is_aborted() {
                debug!(
                    item_id = %context.item_id,
                    processor = processor.name(),
                    "pipeline aborted"
                );
                break;
            }
        }

        Ok(context.into_result().unwrap_or(PublishItemResult {
            operation: PublishOperation::Published,
            child_action: PublishChildAction::Allow,
            explanation: None,
        }))
    }

    /// Runs every item concurrently. A skipped or failed item never stops the
    /// others; outcomes come back in input order. Each item task runs under
    /// the caller's security state.
    pub async fn run_batch(
        self: &Arc<Self>,
        items: Vec<ItemId>,
        options: PublishOptions,
    ) -> PublishReport {
        let started_at = self.clock.now();
        let state = current_security_state();
        let mut tasks = JoinSet::new();

        for (index, item_id) in items.iter().copied().enumerate() {
            let pipeline = Arc::clone(self);
            let context = PublishItemContext::new(item_id, options.clone());
            let span = info_span!("publish_item", %item_id);
            tasks.spawn(
                with_security_state(state, async move { (index, pipeline.run(context).await) })
                    .instrument(span),
            );
        }

        let mut outcomes: Vec<Option<ItemOutcome>> = vec![None; items.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(result))) => {
                    outcomes[index] = Some(ItemOutcome::Completed {
                        item_id: items[index],
                        result,
                    });
                }
                Ok((index, Err(err))) => {
                    warn!(item_id = %items[index], error = %err, "publish item failed");
                    outcomes[index] = Some(ItemOutcome::Failed {
                        item_id: items[index],
                        error: err.to_string(),
                    });
                }
                Err(err) => error!(error = %err, "publish item task did not complete"),
            }
        }

        let items: Vec<ItemOutcome> = outcomes
            .into_iter()
            .zip(items)
            .map(|(outcome, item_id)| {
                outcome.unwrap_or_else(|| ItemOutcome::Failed {
                    item_id,
                    error: "publish item task did not complete".into(),
                })
            })
            .collect();

        let count = |operation: PublishOperation| {
            items
                .iter()
                .filter(|outcome| outcome.operation() == Some(operation))
                .count()
        };
        let published = count(PublishOperation::Published);
        let skipped = count(PublishOperation::Skipped);
        let failed = items
            .iter()
            .filter(|outcome| matches!(outcome, ItemOutcome::Failed { .. }))
            .count();

        PublishReport {
            started_at,
            finished_at: self.clock.now(),
            published,
            skipped,
            failed,
            items,
        }
    }
}
