// src/infrastructure/plan.rs
//! JSON description of a dry-run publish: the content of each database, the
//! users and access rules, and the items to push through the pipeline.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    config::PublishingSettings,
    domain::{
        item::{DatabaseName, ItemId, ResolvedItem},
        publishing::PublishOptions,
        user::{AccountName, Principal},
    },
    infrastructure::memory::{
        AccessRule, AclAuthorizationOracle, InMemoryIdentityProvider, InMemoryItemStore,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishPlan {
    /// Overrides the environment settings when present.
    #[serde(default)]
    pub settings: Option<PublishingSettings>,
    pub user_name: AccountName,
    pub source_database: DatabaseName,
    pub target_database: DatabaseName,
    #[serde(default)]
    pub users: Vec<Principal>,
    #[serde(default)]
    pub items: Vec<ResolvedItem>,
    #[serde(default)]
    pub access_rules: Vec<AccessRule>,
    pub publish: Vec<ItemId>,
}

impl PublishPlan {
    pub fn from_json(json: &str) -> ApplicationResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ApplicationError::validation(format!("invalid publish plan: {err}")))
    }

    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let json = fs::read_to_string(path).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to read publish plan {}: {err}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn options(&self) -> PublishOptions {
        PublishOptions {
            user_name: self.user_name.clone(),
            source_database: self.source_database.clone(),
            target_database: self.target_database.clone(),
        }
    }

    pub fn settings_or(&self, fallback: PublishingSettings) -> PublishingSettings {
        self.settings.unwrap_or(fallback)
    }

    pub fn item_store(&self) -> InMemoryItemStore {
        InMemoryItemStore::with_items(self.items.iter().cloned())
    }

    pub fn identity_provider(&self) -> InMemoryIdentityProvider {
        InMemoryIdentityProvider::new(self.users.iter().cloned())
    }

    pub fn oracle(&self) -> AclAuthorizationOracle {
        AclAuthorizationOracle::new(self.access_rules.clone())
    }
}
