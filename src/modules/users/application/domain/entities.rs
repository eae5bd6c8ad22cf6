use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored user record, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, example = "3f1c2a9e-6f53-4a57-9a43-0c1f4d5b7e21")]
    pub id: UserId,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub image_data: Option<String>,
    /// External player/team ids this user follows.
    pub following_ids: Vec<String>,
    pub post_ids: Vec<String>,
}

/// Fields accepted when a user is created. Array fields always start empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub image_data: Option<String>,
}

/// Partial update. `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub image_data: Option<String>,
    pub following_ids: Option<Vec<String>>,
}

impl UserChanges {
    /// Drops every empty value: an empty string or list never overwrites
    /// stored data, so an update cannot clear a field.
    pub fn without_empty_values(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            username: keep(self.username),
            email: keep(self.email),
            name: keep(self.name),
            phone: keep(self.phone),
            image_data: keep(self.image_data),
            following_ids: self
                .following_ids
                .map(dedup_preserving_order)
                .filter(|ids| !ids.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.name.is_none()
            && self.phone.is_none()
            && self.image_data.is_none()
            && self.following_ids.is_none()
    }

    /// True when applying these changes to `user` would not modify anything.
    pub fn is_noop_for(&self, user: &User) -> bool {
        fn same(change: &Option<String>, current: &str) -> bool {
            change.as_deref().map_or(true, |v| v == current)
        }
        fn same_opt(change: &Option<String>, current: &Option<String>) -> bool {
            change.is_none() || change == current
        }

        same(&self.username, &user.username)
            && same(&self.email, &user.email)
            && same_opt(&self.name, &user.name)
            && same_opt(&self.phone, &user.phone)
            && same_opt(&self.image_data, &user.image_data)
            && self
                .following_ids
                .as_ref()
                .map_or(true, |ids| ids == &user.following_ids)
    }
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !id.is_empty() && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Which unique field a conflicting write collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Username,
    Email,
}

impl DuplicateField {
    /// Picks the colliding field out of a store error message, defaulting to
    /// username when the message does not mention email.
    pub fn from_store_message(msg: &str) -> Self {
        if msg.to_lowercase().contains("email") {
            DuplicateField::Email
        } else {
            DuplicateField::Username
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateField::Username => write!(f, "username"),
            DuplicateField::Email => write!(f, "email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid email address: {0}")]
pub struct InvalidEmail(pub String);

pub fn validate_email(email: &str) -> Result<(), InvalidEmail> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(InvalidEmail(email.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid pagination parameters")]
pub struct InvalidPagination;

/// Skip/limit window. Only constructible with `skip >= 0` and `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    limit: u64,
}

impl PageRequest {
    pub const DEFAULT_SKIP: i64 = 0;
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(skip: i64, limit: i64) -> Result<Self, InvalidPagination> {
        if skip < 0 || limit < 1 {
            return Err(InvalidPagination);
        }
        Ok(Self {
            skip: skip as u64,
            limit: limit as u64,
        })
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: Self::DEFAULT_SKIP as u64,
            limit: Self::DEFAULT_LIMIT as u64,
        }
    }
}
