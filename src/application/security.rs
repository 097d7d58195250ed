//! Task-scoped switch for whether rights are evaluated at all.
//!
//! Publish runs commonly read content with security disabled. Rights queries
//! made by the publish gate are wrapped in [`with_security_enabled`] so the
//! oracle applies the real rules regardless of the surrounding state. The
//! override lives only as long as the wrapped future and is invisible to
//! other tasks, including tasks spawned from inside the scope.

use std::future::Future;

tokio::task_local! {
    static SECURITY_STATE: SecurityState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityState {
    #[default]
    Enabled,
    Disabled,
}

impl SecurityState {
    pub fn is_enabled(self) -> bool {
        self == SecurityState::Enabled
    }
}

/// State seen by the current task. `Enabled` outside of any scope.
pub fn current_security_state() -> SecurityState {
    SECURITY_STATE.try_with(|state| *state).unwrap_or_default()
}

pub async fn with_security_state<F>(state: SecurityState, fut: F) -> F::Output
where
    F: Future,
{
    SECURITY_STATE.scope(state, fut).await
}

pub async fn with_security_enabled<F>(fut: F) -> F::Output
where
    F: Future,
{
    with_security_state(SecurityState::Enabled, fut).await
}

pub async fn with_security_disabled<F>(fut: F) -> F::Output
where
    F: Future,
{
    with_security_state(SecurityState::Disabled, fut).await
}
