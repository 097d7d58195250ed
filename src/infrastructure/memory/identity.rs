// src/infrastructure/memory/identity.rs
use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    application::{ApplicationResult, ports::identity::IdentityProvider},
    domain::user::Principal,
};

/// Users keyed by lower-cased account name.
#[derive(Debug, Default, Clone)]
pub struct InMemoryIdentityProvider {
    users: HashMap<String, Principal>,
}

impl InMemoryIdentityProvider {
    pub fn new(users: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.name.as_str().to_ascii_lowercase(), user))
                .collect(),
        }
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn find_by_name(&self, name: &str) -> ApplicationResult<Option<Principal>> {
        Ok(self.users.get(&name.to_ascii_lowercase()).cloned())
    }
}
