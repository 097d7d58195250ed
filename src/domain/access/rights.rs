// src/domain/access/rights.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessRight {
    #[serde(rename = "item:read")]
    ItemRead,
    #[serde(rename = "item:write")]
    ItemWrite,
    #[serde(rename = "item:delete")]
    ItemDelete,
    #[serde(rename = "language:write")]
    LanguageWrite,
}

impl AccessRight {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRight::ItemRead => "item:read",
            AccessRight::ItemWrite => "item:write",
            AccessRight::ItemDelete => "item:delete",
            AccessRight::LanguageWrite => "language:write",
        }
    }
}

impl fmt::Display for AccessRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the checks a publish item has to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishCheck {
    Language,
    Update,
    Deletion,
}

impl PublishCheck {
    /// Rights that must all be granted, queried in this order.
    pub fn required_rights(&self) -> &'static [AccessRight] {
        match self {
            PublishCheck::Language => &[AccessRight::LanguageWrite],
            PublishCheck::Update => &[AccessRight::ItemRead, AccessRight::ItemWrite],
            PublishCheck::Deletion => &[AccessRight::ItemDelete],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishCheck::Language => "language",
            PublishCheck::Update => "update",
            PublishCheck::Deletion => "deletion",
        }
    }
}

impl fmt::Display for PublishCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
