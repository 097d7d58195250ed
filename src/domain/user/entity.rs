// src/domain/user/entity.rs
use crate::domain::user::value_objects::AccountName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The resolved identity of the user running a publish operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: AccountName,
    #[serde(default)]
    pub is_administrator: bool,
    #[serde(default)]
    pub roles: BTreeSet<AccountName>,
}

impl Principal {
    pub fn new(name: AccountName) -> Self {
        Self {
            name,
            is_administrator: false,
            roles: BTreeSet::new(),
        }
    }

    pub fn administrator(name: AccountName) -> Self {
        Self {
            is_administrator: true,
            ..Self::new(name)
        }
    }

    pub fn with_role(mut self, role: AccountName) -> Self {
        self.roles.insert(role);
        self
    }

    /// True if `account` names this user or one of its roles.
    pub fn is_account(&self, account: &AccountName) -> bool {
        self.name.matches(account.as_str())
            || self.roles.iter().any(|role| role.matches(account.as_str()))
    }
}
