// src/backend/models/user.rs
use crate::models::common::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A registered account. The password is held only as a bcrypt hash and the
/// verification token is present exactly while the account is unverified.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub password_hash: String,
    pub verification_token: Option<String>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

/// Projection returned to clients. Never carries the password hash or the
/// verification token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

impl UserAccount {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
        }
    }
}
