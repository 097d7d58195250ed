// src/domain/item/entity.rs
use crate::domain::item::value_objects::{DatabaseName, ItemId, LanguageCode, TemplateId};
use serde::{Deserialize, Serialize};

/// Read snapshot of an item as it exists in one database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub id: ItemId,
    pub name: String,
    pub template_id: TemplateId,
    pub language: LanguageCode,
    pub database: DatabaseName,
}

impl ResolvedItem {
    pub fn is_language_definition(&self) -> bool {
        self.template_id.is_language()
    }
}
