// src/application/services/check_security.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{gate::PublishAuthorizationGate, pipeline::PublishItemProcessor};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            content::{ItemStore, PublishHelper},
            identity::IdentityProvider,
        },
    },
    domain::{
        access::Decision,
        publishing::{PublishChildAction, PublishItemContext, PublishOperation},
    },
};

/// Publish item processor that skips items the acting user may not publish.
///
/// A denied item is skipped on its own: its children are still processed and
/// the run continues.
pub struct CheckSecurity {
    gate: Arc<PublishAuthorizationGate>,
    identities: Arc<dyn IdentityProvider>,
    store: Arc<dyn ItemStore>,
}

impl CheckSecurity {
    pub fn new(
        gate: Arc<PublishAuthorizationGate>,
        identities: Arc<dyn IdentityProvider>,
        store: Arc<dyn ItemStore>,
    ) -> Self {
        Self {
            gate,
            identities,
            store,
        }
    }
}

#[async_trait]
impl PublishItemProcessor for CheckSecurity {
    fn name(&self) -> &'static str {
        "check_security"
    }

    async fn process(&self, context: &mut PublishItemContext) -> ApplicationResult<()> {
        let user_name = context.options.user_name.as_str();
        let principal = self
            .identities
            .find_by_name(user_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user '{user_name}'")))?;

        let helper = PublishHelper::new(
            Arc::clone(&self.store),
            context.options.source_database.clone(),
            context.options.target_database.clone(),
        );

        if let Decision::Denied(denial) = self
            .gate
            .evaluate(context.item_id, &principal, &helper)
            .await?
        {
            context.abort_pipeline(
                PublishOperation::Skipped,
                PublishChildAction::Allow,
                denial.explanation(),
            );
        }
        Ok(())
    }
}
