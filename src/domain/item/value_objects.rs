// src/domain/item/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identifier of a content item. The same id addresses the item in every
/// database it has been published to.
/// Serialized in its braced upper-case display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Uuid")]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::Validation("item id cannot be nil".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl TryFrom<Uuid> for ItemId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|err| DomainError::Validation(format!("invalid item id '{s}': {err}")))?;
        Self::new(uuid)
    }
}

/// Braced upper-case form, e.g. `{F68F13A6-3395-426A-B9A1-FA2DC60D94EB}`.
impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
    /// Template of the items that define a content language.
    pub const LANGUAGE: Self = Self(uuid::uuid!("f68f13a6-3395-426a-b9a1-fa2dc60d94eb"));

    pub fn is_language(&self) -> bool {
        *self == Self::LANGUAGE
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0)
    }
}

/// Content language code such as `en` or `da-DK`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("language code cannot be empty".into()));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "language code '{value}' cannot contain whitespace"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("database name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatabaseName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatabaseName> for String {
    fn from(value: DatabaseName) -> Self {
        value.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_item_id_is_rejected() {
        assert!(ItemId::new(Uuid::nil()).is_err());
    }

    #[test]
    fn item_id_displays_braced_upper_case() {
        let id: ItemId = "f68f13a6-3395-426a-b9a1-fa2dc60d94eb".parse().unwrap();
        assert_eq!(id.to_string(), "{F68F13A6-3395-426A-B9A1-FA2DC60D94EB}");
    }

    #[test]
    fn item_id_parses_braced_form() {
        let id: ItemId = "{110D559F-DEA5-42EA-9C1C-8A5DF7E70EF9}".parse().unwrap();
        assert_eq!(id.to_string(), "{110D559F-DEA5-42EA-9C1C-8A5DF7E70EF9}");
    }

    #[test]
    fn item_id_serializes_in_display_form() {
        let id: ItemId = "2a3b4c5d-6e7f-4a8b-9c0d-1e2f3a4b5c6d".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("{2A3B4C5D-6E7F-4A8B-9C0D-1E2F3A4B5C6D}"));
        let back: ItemId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn language_template_constant() {
        assert_eq!(
            TemplateId::LANGUAGE.to_string(),
            "{F68F13A6-3395-426A-B9A1-FA2DC60D94EB}"
        );
        assert!(TemplateId::LANGUAGE.is_language());
    }

    #[test]
    fn language_code_matching_ignores_case() {
        let code = LanguageCode::new("da-DK").unwrap();
        assert!(code.matches("da-dk"));
        assert!(!code.matches("en"));
        assert!(LanguageCode::new(" ").is_err());
        assert!(LanguageCode::new("en US").is_err());
    }

    #[test]
    fn database_name_cannot_be_empty() {
        assert!(DatabaseName::new("").is_err());
        assert_eq!(DatabaseName::new("web").unwrap().as_str(), "web");
    }
}
