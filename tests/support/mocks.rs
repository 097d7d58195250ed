// tests/support/mocks.rs
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use publish_guard::application::ApplicationResult;
use publish_guard::application::error::ApplicationError;
use publish_guard::application::ports::authorization::AuthorizationOracle;
use publish_guard::application::ports::content::{LanguageRegistry, PublishItemResolver};
use publish_guard::application::ports::time::Clock;
use publish_guard::application::security::{SecurityState, current_security_state};
use publish_guard::domain::access::AccessRight;
use publish_guard::domain::item::{DatabaseName, ItemId, LanguageCode, ResolvedItem};
use publish_guard::domain::user::Principal;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* -------------------------------- oracle -------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleCall {
    pub item_id: ItemId,
    pub right: AccessRight,
    pub state: SecurityState,
}

/// Grants exactly the listed (item, right) pairs and records every query.
#[derive(Default)]
pub struct ScriptedOracle {
    grants: HashSet<(ItemId, AccessRight)>,
    calls: Mutex<Vec<OracleCall>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, item_id: ItemId, rights: &[AccessRight]) -> Self {
        for right in rights {
            self.grants.insert((item_id, *right));
        }
        self
    }

    pub fn calls(&self) -> Vec<OracleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rights_queried(&self) -> Vec<AccessRight> {
        self.calls().into_iter().map(|call| call.right).collect()
    }
}

#[async_trait]
impl AuthorizationOracle for ScriptedOracle {
    async fn is_allowed(
        &self,
        item: &ResolvedItem,
        right: AccessRight,
        _principal: &Principal,
    ) -> ApplicationResult<bool> {
        self.calls.lock().unwrap().push(OracleCall {
            item_id: item.id,
            right,
            state: current_security_state(),
        });
        Ok(self.grants.contains(&(item.id, right)))
    }
}

pub struct FailingOracle;

#[async_trait]
impl AuthorizationOracle for FailingOracle {
    async fn is_allowed(
        &self,
        _item: &ResolvedItem,
        _right: AccessRight,
        _principal: &Principal,
    ) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("rights engine unavailable"))
    }
}

/* ------------------------------- content ------------------------------- */

/// Fixed source/target snapshots for the item under test.
#[derive(Default, Clone)]
pub struct StaticResolver {
    pub source: HashMap<ItemId, ResolvedItem>,
    pub target: HashMap<ItemId, ResolvedItem>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, item: ResolvedItem) -> Self {
        self.source.insert(item.id, item);
        self
    }

    pub fn with_target(mut self, item: ResolvedItem) -> Self {
        self.target.insert(item.id, item);
        self
    }
}

#[async_trait]
impl PublishItemResolver for StaticResolver {
    async fn resolve_source_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>> {
        Ok(self.source.get(&id).cloned())
    }

    async fn resolve_target_item(&self, id: ItemId) -> ApplicationResult<Option<ResolvedItem>> {
        Ok(self.target.get(&id).cloned())
    }
}

/// Language items keyed by (database, code).
#[derive(Default)]
pub struct StaticLanguages {
    items: HashMap<(String, String), ResolvedItem>,
}

impl StaticLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, item: ResolvedItem) -> Self {
        self.items.insert(
            (item.database.as_str().to_string(), item.name.clone()),
            item,
        );
        self
    }
}

#[async_trait]
impl LanguageRegistry for StaticLanguages {
    async fn resolve_language_item(
        &self,
        code: &LanguageCode,
        database: &DatabaseName,
    ) -> ApplicationResult<Option<ResolvedItem>> {
        Ok(self
            .items
            .get(&(database.as_str().to_string(), code.as_str().to_string()))
            .cloned())
    }
}
