//! User types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// User creation request.
///
/// Fields are taken as whatever JSON the client sent and passed through to
/// the store; a missing field becomes NULL and it is up to the store to
/// reject it or coerce it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: Some(Value::String(username.into())),
            email: Some(Value::String(email.into())),
        }
    }

    /// `username` as the text bound into the insert
    pub fn username_text(&self) -> Option<String> {
        column_text(self.username.as_ref())
    }

    /// `email` as the text bound into the insert
    pub fn email_text(&self) -> Option<String> {
        column_text(self.email.as_ref())
    }
}

fn column_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Response body for a created user: the generated id plus the echoed input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl CreatedUser {
    pub fn from_request(id: i64, req: NewUser) -> Self {
        Self {
            id,
            username: req.username,
            email: req.email,
        }
    }
}
