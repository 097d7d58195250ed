//! Publish-time authorization for content publishing pipelines.
//!
//! [`application::services::PublishAuthorizationGate`] decides, per item,
//! whether the acting user may publish it. [`application::services::CheckSecurity`]
//! plugs the gate into a publish item pipeline and skips denied items without
//! stopping the run.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
