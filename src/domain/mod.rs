pub mod access;
pub mod errors;
pub mod item;
pub mod publishing;
pub mod user;
