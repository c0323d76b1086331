use serde::{Deserialize, Serialize};

use super::RecordId;

/// A user as stored by the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
}

impl UserRecord {
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            lastname: self.lastname.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The editable part of a user, sent as the create/replace body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub lastname: String,
    pub phone: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            phone: phone.into(),
        }
    }

    /// All three fields are required before a create or update goes out.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.lastname.is_empty() && !self.phone.is_empty()
    }
}
