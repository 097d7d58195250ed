pub mod acl;
pub mod identity;
pub mod item_store;

pub use acl::{AccessRule, AclAuthorizationOracle, Permission};
pub use identity::InMemoryIdentityProvider;
pub use item_store::InMemoryItemStore;
