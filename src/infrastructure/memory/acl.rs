// src/infrastructure/memory/acl.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    application::{
        ApplicationResult, ports::authorization::AuthorizationOracle,
        security::current_security_state,
    },
    domain::{
        access::AccessRight,
        item::{ItemId, ResolvedItem},
        user::{AccountName, Principal},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Allow,
    Deny,
}

/// Grants or denies one right on one item to a user or role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pub account: AccountName,
    pub item_id: ItemId,
    pub right: AccessRight,
    pub permission: Permission,
}

impl AccessRule {
    fn applies_to(&self, item: &ResolvedItem, right: AccessRight, principal: &Principal) -> bool {
        self.item_id == item.id && self.right == right && principal.is_account(&self.account)
    }
}

/// Rights oracle over an explicit access control list.
///
/// With security disabled every right is granted. Administrators get every
/// right. Otherwise a matching deny wins over a matching allow, and no
/// matching rule means denied.
#[derive(Debug, Default, Clone)]
pub struct AclAuthorizationOracle {
    rules: Vec<AccessRule>,
}

impl AclAuthorizationOracle {
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    fn evaluate(&self, item: &ResolvedItem, right: AccessRight, principal: &Principal) -> bool {
        if principal.is_administrator {
            return true;
        }
        let mut matching = self
            .rules
            .iter()
            .filter(|rule| rule.applies_to(item, right, principal))
            .map(|rule| rule.permission)
            .peekable();
        matching.peek().is_some() && matching.all(|permission| permission == Permission::Allow)
    }
}

#[async_trait]
impl AuthorizationOracle for AclAuthorizationOracle {
    async fn is_allowed(
        &self,
        item: &ResolvedItem,
        right: AccessRight,
        principal: &Principal,
    ) -> ApplicationResult<bool> {
        if !current_security_state().is_enabled() {
            return Ok(true);
        }
        Ok(self.evaluate(item, right, principal))
    }
}
