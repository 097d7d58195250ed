// src/application/ports/identity.rs
use crate::{application::ApplicationResult, domain::user::Principal};
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_by_name(&self, name: &str) -> ApplicationResult<Option<Principal>>;
}
