//! User record and request payload types.

use serde::{Deserialize, Serialize};

/// System-assigned user identifier.
pub type UserId = u64;

/// A single user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for creating a user.
///
/// Both fields are required, but they are optional here so that a missing
/// field is reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Payload for a partial update. Each field is applied independently.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUser {
    /// The new name, if one was supplied and is non-empty.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    /// The new email, if one was supplied and is non-empty.
    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }
}

/// Treats `None` and `""` alike as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_in_field_order() {
        let user = User::new(1, "John Doe", "john@example.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#);
    }

    #[test]
    fn test_update_treats_empty_and_null_as_absent() {
        let patch: UpdateUser = serde_json::from_str(r#"{"name":"","email":null}"#).unwrap();
        assert_eq!(patch.name(), None);
        assert_eq!(patch.email(), None);

        let patch: UpdateUser = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(patch.name(), Some("X"));
        assert_eq!(patch.email(), None);
    }

    #[test]
    fn test_create_ignores_client_id() {
        let payload: CreateUser =
            serde_json::from_str(r#"{"id":42,"name":"A","email":"a@b.c"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("A"));
        assert_eq!(payload.email.as_deref(), Some("a@b.c"));
    }
}
