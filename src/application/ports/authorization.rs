// src/application/ports/authorization.rs
use crate::{
    application::ApplicationResult,
    domain::{access::AccessRight, item::ResolvedItem, user::Principal},
};
use async_trait::async_trait;

/// External rights engine. Implementations should honour
/// [`crate::application::security::current_security_state`].
#[async_trait]
pub trait AuthorizationOracle: Send + Sync {
    async fn is_allowed(
        &self,
        item: &ResolvedItem,
        right: AccessRight,
        principal: &Principal,
    ) -> ApplicationResult<bool>;
}
