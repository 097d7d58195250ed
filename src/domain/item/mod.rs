pub mod entity;
pub mod value_objects;

pub use entity::ResolvedItem;
pub use value_objects::{DatabaseName, ItemId, LanguageCode, TemplateId};
