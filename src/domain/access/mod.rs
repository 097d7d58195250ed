pub mod decision;
pub mod rights;

pub use decision::{Decision, Denial};
pub use rights::{AccessRight, PublishCheck};
