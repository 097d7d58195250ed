// src/infrastructure/memory/item_store.rs
use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard},
};

use async_trait::async_trait;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::content::{ItemStore, LanguageRegistry},
    },
    domain::item::{DatabaseName, ItemId, LanguageCode, ResolvedItem},
};

type Databases = HashMap<DatabaseName, HashMap<ItemId, ResolvedItem>>;

/// Item snapshots for any number of databases, kept in memory.
///
/// Also serves as the language registry: a language is defined in a database
/// by an item with the language template whose name is the language code.
pub struct InMemoryItemStore {
    databases: RwLock<Databases>,
}

impl InMemoryItemStore {
    pub fn with_items(items: impl IntoIterator<Item = ResolvedItem>) -> Self {
        let mut databases = Databases::new();
        for item in items {
            databases
                .entry(item.database.clone())
                .or_default()
                .insert(item.id, item);
        }
        Self {
            databases: RwLock::new(databases),
        }
    }

    fn read(&self) -> ApplicationResult<RwLockReadGuard<'_, Databases>> {
        self.databases
            .read()
            .map_err(|_| ApplicationError::infrastructure("item store lock poisoned"))
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get_item(
        &self,
        database: &DatabaseName,
        id: ItemId,
    ) -> ApplicationResult<Option<ResolvedItem>> {
        let databases = self.read()?;
        Ok(databases
            .get(database)
            .and_then(|items| items.get(&id))
            .cloned())
    }
}

#[async_trait]
impl LanguageRegistry for InMemoryItemStore {
    async fn resolve_language_item(
        &self,
        code: &LanguageCode,
        database: &DatabaseName,
    ) -> ApplicationResult<Option<ResolvedItem>> {
        let databases = self.read()?;
        Ok(databases.get(database).and_then(|items| {
            items
                .values()
                .find(|item| item.is_language_definition() && code.matches(&item.name))
                .cloned()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::TemplateId;
    use uuid::Uuid;

    fn item(name: &str, template_id: TemplateId, database: &str) -> ResolvedItem {
        ResolvedItem {
            id: ItemId::new(Uuid::new_v4()).unwrap(),
            name: name.into(),
            template_id,
            language: LanguageCode::new("en").unwrap(),
            database: DatabaseName::new(database).unwrap(),
        }
    }

    #[tokio::test]
    async fn items_are_scoped_by_database() {
        let page = item("home", TemplateId(Uuid::new_v4()), "master");
        let store = InMemoryItemStore::with_items([page.clone()]);
        let master = DatabaseName::new("master").unwrap();
        let web = DatabaseName::new("web").unwrap();

        assert_eq!(store.get_item(&master, page.id).await.unwrap(), Some(page.clone()));
        assert_eq!(store.get_item(&web, page.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn language_lookup_matches_name_and_template() {
        let english = item("EN", TemplateId::LANGUAGE, "master");
        let decoy = item("da", TemplateId(Uuid::new_v4()), "master");
        let store = InMemoryItemStore::with_items([english.clone(), decoy]);
        let master = DatabaseName::new("master").unwrap();

        let found = store
            .resolve_language_item(&LanguageCode::new("en").unwrap(), &master)
            .await
            .unwrap();
        assert_eq!(found, Some(english));

        let missing = store
            .resolve_language_item(&LanguageCode::new("da").unwrap(), &master)
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
