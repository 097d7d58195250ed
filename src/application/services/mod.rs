pub mod check_security;
pub mod gate;
pub mod pipeline;

pub use check_security::CheckSecurity;
pub use gate::PublishAuthorizationGate;
pub use pipeline::{ItemOutcome, PublishItemPipeline, PublishItemProcessor, PublishReport};
