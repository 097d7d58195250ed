// tests/support/builders.rs
use uuid::Uuid;

use publish_guard::domain::item::{DatabaseName, ItemId, LanguageCode, ResolvedItem, TemplateId};
use publish_guard::domain::user::{AccountName, Principal};

pub const PAGE_TEMPLATE: Uuid = uuid::uuid!("76036f5e-cbce-46d1-af0a-4143f9b557aa");

pub fn new_item_id() -> ItemId {
    ItemId::new(Uuid::new_v4()).unwrap()
}

pub fn account(name: &str) -> AccountName {
    AccountName::new(name).unwrap()
}

pub fn author() -> Principal {
    Principal::new(account("sitecore\\author"))
}

pub struct ItemBuilder {
    id: ItemId,
    name: String,
    template_id: TemplateId,
    language: String,
    database: String,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            id: new_item_id(),
            name: "Home".into(),
            template_id: TemplateId(PAGE_TEMPLATE),
            language: "en".into(),
            database: "master".into(),
        }
    }

    /// A language definition item named after its code.
    pub fn language(code: &str) -> Self {
        Self::new()
            .name(code)
            .template(TemplateId::LANGUAGE)
            .language_code(code)
    }

    pub fn id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn template(mut self, template_id: TemplateId) -> Self {
        self.template_id = template_id;
        self
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language = code.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn build(self) -> ResolvedItem {
        ResolvedItem {
            id: self.id,
            name: self.name,
            template_id: self.template_id,
            language: LanguageCode::new(self.language).unwrap(),
            database: DatabaseName::new(self.database).unwrap(),
        }
    }
}
