// src/application/services/gate.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::{
        ApplicationResult,
        ports::{
            authorization::AuthorizationOracle,
            content::{LanguageRegistry, PublishItemResolver},
        },
        security::with_security_enabled,
    },
    config::PublishingSettings,
    domain::{
        access::{Decision, Denial, PublishCheck},
        item::{ItemId, ResolvedItem},
        user::Principal,
    },
};

/// Decides whether a user may publish a single item.
///
/// Checks run in order and stop at the first denial:
/// 1. the global `check_security` switch (off means allow),
/// 2. language write on the item's language,
/// 3. read + write on the source item, or delete on the target item when the
///    item no longer exists in the source database.
///
/// Missing items or language definitions are allowed. The gate holds no
/// mutable state and may be shared across concurrent evaluations.
pub struct PublishAuthorizationGate {
    oracle: Arc<dyn AuthorizationOracle>,
    languages: Arc<dyn LanguageRegistry>,
    settings: PublishingSettings,
}

impl PublishAuthorizationGate {
    pub fn new(
        oracle: Arc<dyn AuthorizationOracle>,
        languages: Arc<dyn LanguageRegistry>,
        settings: PublishingSettings,
    ) -> Self {
        Self {
            oracle,
            languages,
            settings,
        }
    }

    pub async fn evaluate(
        &self,
        item_id: ItemId,
        principal: &Principal,
        items: &dyn PublishItemResolver,
    ) -> ApplicationResult<Decision> {
        if !self.settings.check_security {
            debug!(%item_id, "publish security check disabled");
            return Ok(Decision::Allowed);
        }

        let source = items.resolve_source_item(item_id).await?;

        let decision = self
            .check_language(item_id, source.as_ref(), principal, items)
            .await?;
        if !decision.is_allowed() {
            return Ok(log_decision(decision));
        }

        let decision = match source {
            Some(source) => self.check_update(&source, principal).await?,
            None => self.check_deletion(item_id, principal, items).await?,
        };
        Ok(log_decision(decision))
    }

    async fn check_language(
        &self,
        item_id: ItemId,
        source: Option<&ResolvedItem>,
        principal: &Principal,
        items: &dyn PublishItemResolver,
    ) -> ApplicationResult<Decision> {
        let target;
        let item = match source {
            Some(item) => item,
            None => {
                target = items.resolve_target_item(item_id).await?;
                match target.as_ref() {
                    Some(item) => item,
                    None => {
                        debug!(%item_id, "item missing from source and target");
                        return Ok(Decision::Allowed);
                    }
                }
            }
        };

        let language_item = if item.is_language_definition() {
            Some(item.clone())
        } else {
            self.languages
                .resolve_language_item(&item.language, &item.database)
                .await?
        };
        let Some(language_item) = language_item else {
            debug!(
                %item_id,
                language = %item.language,
                database = %item.database,
                "language definition not found, allowing"
            );
            return Ok(Decision::Allowed);
        };

        self.require(PublishCheck::Language, &language_item, item, principal)
            .await
    }

    async fn check_update(
        &self,
        source: &ResolvedItem,
        principal: &Principal,
    ) -> ApplicationResult<Decision> {
        self.require(PublishCheck::Update, source, source, principal)
            .await
    }

    async fn check_deletion(
        &self,
        item_id: ItemId,
        principal: &Principal,
        items: &dyn PublishItemResolver,
    ) -> ApplicationResult<Decision> {
        if !self.settings.require_target_delete_right {
            debug!(%item_id, "target delete right not required");
            return Ok(Decision::Allowed);
        }
        let Some(target) = items.resolve_target_item(item_id).await? else {
            debug!(%item_id, "nothing to delete in target");
            return Ok(Decision::Allowed);
        };
        self.require(PublishCheck::Deletion, &target, &target, principal)
            .await
    }

    /// Queries every right of `check` on `resource`; a denial is reported
    /// against `subject`, the item being published.
    async fn require(
        &self,
        check: PublishCheck,
        resource: &ResolvedItem,
        subject: &ResolvedItem,
        principal: &Principal,
    ) -> ApplicationResult<Decision> {
        for &right in check.required_rights() {
            let allowed =
                with_security_enabled(self.oracle.is_allowed(resource, right, principal)).await?;
            if !allowed {
                debug!(item_id = %resource.id, %right, user = %principal.name, "right not granted");
                return Ok(Decision::Denied(Denial::new(
                    check,
                    principal.name.clone(),
                    subject.id,
                    subject.database.clone(),
                )));
            }
        }
        Ok(Decision::Allowed)
    }
}

fn log_decision(decision: Decision) -> Decision {
    if let Decision::Denied(denial) = &decision {
        info!(
            check = %denial.check,
            user = %denial.user,
            item_id = %denial.item_id,
            database = %denial.database,
            "publish denied"
        );
    }
    decision
}
