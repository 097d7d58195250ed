pub mod error;
pub mod ports;
pub mod security;
pub mod services;

pub use error::ApplicationResult;
