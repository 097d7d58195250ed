// src/application/ports/content.rs
use std::sync::Arc;

use crate::{
    application::ApplicationResult,
    domain::item::{DatabaseName, ItemId, LanguageCode, ResolvedItem},
};
use async_trait::async_trait;

/// Read access to item snapshots, by database.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get_item(
        &self,
        database: &DatabaseName,
        id: ItemId,
    ) -> ApplicationResult<Option<ResolvedItem>>;
}

#[async_trait]
pub trait LanguageRegistry: Send + Sync {
    /// The item that defines `code` in `database`, if one exists.
    async fn resolve_language_item(
        &self,
        code: &LanguageCode,
        database: &DatabaseName,
    ) -> ApplicationResult<Option<ResolvedItem>>;
}

/// Resolves the item being published on either side of the run.
#[async_trait]
pub trait PublishItemResolver: Send + Sync {
    async fn resolve_source_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>>;
    async fn resolve_target_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>>;
}

/// An [`ItemStore`] bound to the source and target databases of one run.
#[derive(Clone)]
pub struct PublishHelper {
    store: Arc<dyn ItemStore>,
    source: DatabaseName,
    target: DatabaseName,
}

impl PublishHelper {
    pub fn new(store: Arc<dyn ItemStore>, source: DatabaseName, target: DatabaseName) -> Self {
        Self {
            store,
            source,
            target,
        }
    }
}

#[async_trait]
impl PublishItemResolver for PublishHelper {
    async fn resolve_source_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>> {
        self.store.get_item(&self.source, id).await
    }

    async fn resolve_target_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>> {
        self.store.get_item(&self.target, id).await
    }
}
