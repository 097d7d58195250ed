pub mod entity;
pub mod value_objects;

pub use entity::Principal;
pub use value_objects::AccountName;
