// src/domain/publishing/context.rs
use crate::domain::item::{DatabaseName, ItemId};
use crate::domain::user::AccountName;
use serde::{Deserialize, Serialize};

/// Settings shared by every item of one publish run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    pub user_name: AccountName,
    pub source_database: DatabaseName,
    pub target_database: DatabaseName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishOperation {
    Published,
    Skipped,
}

/// What the run should do with the children of an aborted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishChildAction {
    Allow,
    Skip,
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishItemResult {
    pub operation: PublishOperation,
    pub child_action: PublishChildAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Per-item state threaded through the processors of a publish item pipeline.
#[derive(Debug, Clone)]
pub struct PublishItemContext {
    pub item_id: ItemId,
    pub options: PublishOptions,
    result: Option<PublishItemResult>,
    aborted: bool,
}

impl PublishItemContext {
    pub fn new(item_id: ItemId, options: PublishOptions) -> Self {
        Self {
            item_id,
            options,
            result: None,
            aborted: false,
        }
    }

    /// Stop running processors for this item only. The run itself goes on.
    pub fn abort_pipeline(
        &mut self,
        operation: PublishOperation,
        child_action: PublishChildAction,
        explanation: impl Into<String>,
    ) {
        self.result = Some(PublishItemResult {
            operation,
            child_action,
            explanation: Some(explanation.into()),
        });
        self.aborted = true;
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn result(&self) -> Option<&PublishItemResult> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<PublishItemResult> {
        self.result
    }
}
