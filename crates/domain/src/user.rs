//! User — a named account record.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::Record;

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
}

/// Client-supplied user fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    #[serde(alias = "Name")]
    pub name: String,
}

impl UserPayload {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Record for User {
    type Payload = UserPayload;

    const KIND: &'static str = "User";
    const FILTER_KEY: &'static str = "name";

    fn from_payload(id: RecordId, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn replace(&mut self, payload: UserPayload) {
        self.name = payload.name;
    }

    fn filter_field(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn should_filter_on_name_ignoring_case() {
        let user = User::from_payload(RecordId::FIRST, UserPayload::new("Ada"));
        assert!(user.matches(Filter::parse(Some("ADA")).as_ref()));
        assert!(!user.matches(Filter::parse(Some("Grace")).as_ref()));
    }

    #[test]
    fn should_read_capitalised_name_key() {
        let payload: UserPayload = serde_json::from_str(r#"{"Name":"Ada"}"#).unwrap();
        assert_eq!(payload, UserPayload::new("Ada"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let user = User::from_payload(RecordId::FIRST, UserPayload::new("Ada"));
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ada"}"#);
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
