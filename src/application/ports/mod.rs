// src/application/ports/mod.rs
pub mod authorization;
pub mod content;
pub mod identity;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AuthorizationOraclePort = dyn authorization::AuthorizationOracle;
pub type ItemStorePort = dyn content::ItemStore;
pub type LanguageRegistryPort = dyn content::LanguageRegistry;
pub type IdentityProviderPort = dyn identity::IdentityProvider;
pub type ClockPort = dyn time::Clock;
