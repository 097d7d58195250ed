// src/domain/access/decision.rs
use crate::domain::{
    access::rights::PublishCheck,
    item::{DatabaseName, ItemId},
    user::AccountName,
};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// Why an item may not be published by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub check: PublishCheck,
    pub user: AccountName,
    pub item_id: ItemId,
    pub database: DatabaseName,
}

impl Denial {
    pub fn new(
        check: PublishCheck,
        user: AccountName,
        item_id: ItemId,
        database: DatabaseName,
    ) -> Self {
        Self {
            check,
            user,
            item_id,
            database,
        }
    }

    pub fn explanation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = match self.check {
            PublishCheck::Language => {
                "To publish an item, a user must have language write access to the item's language."
            }
            PublishCheck::Update => {
                "To publish an update, a user must have read and write access to the source item."
            }
            PublishCheck::Deletion => {
                "To publish a deletion, a user must have delete access to the target item."
            }
        };
        write!(f, "User does not have the required access. {requirement} ")?;
        write!(
            f,
            "User: {}, item id: {}, database: {}.",
            self.user, self.item_id, self.database
        )
    }
}

/// Outcome of checking one item. A denial always carries its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn explanation(&self) -> Option<String> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(denial) => Some(denial.explanation()),
        }
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(denial) => Some(denial),
        }
    }
}

impl Serialize for Decision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Decision", 2)?;
        state.serialize_field("allowed", &self.is_allowed())?;
        state.serialize_field("explanation", &self.explanation())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denial(check: PublishCheck) -> Denial {
        Denial::new(
            check,
            AccountName::new("sitecore\\author").unwrap(),
            "{110D559F-DEA5-42EA-9C1C-8A5DF7E70EF9}".parse().unwrap(),
            DatabaseName::new("master").unwrap(),
        )
    }

    #[test]
    fn update_explanation_names_user_item_and_database() {
        let text = denial(PublishCheck::Update).explanation();
        assert!(text.contains("read and write access"));
        assert!(text.contains("User: sitecore\\author"));
        assert!(text.contains("item id: {110D559F-DEA5-42EA-9C1C-8A5DF7E70EF9}"));
        assert!(text.ends_with("database: master."));
    }

    #[test]
    fn deletion_and_language_explanations() {
        assert!(
            denial(PublishCheck::Deletion)
                .explanation()
                .contains("delete access")
        );
        assert!(
            denial(PublishCheck::Language)
                .explanation()
                .contains("language write access")
        );
    }

    #[test]
    fn allowed_has_no_explanation() {
        assert!(Decision::Allowed.is_allowed());
        assert!(Decision::Allowed.explanation().is_none());
        let denied = Decision::Denied(denial(PublishCheck::Update));
        assert!(!denied.is_allowed());
        assert!(!denied.explanation().unwrap().is_empty());
    }

    #[test]
    fn serializes_as_flag_and_explanation() {
        let json = serde_json::to_value(Decision::Allowed).unwrap();
        assert_eq!(json, serde_json::json!({"allowed": true, "explanation": null}));
    }
}
