pub mod memory;
pub mod plan;
pub mod time;
