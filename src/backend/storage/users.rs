// src/backend/storage/users.rs
use crate::error::ServiceError;
use crate::models::{UserAccount, UserId};
use crate::storage::store::Store;

/// Inserts a new account. The duplicate-email check happens under the same
/// write lock as the insert, so a losing racer gets a conflict instead of a
/// silent duplicate.
pub fn insert(store: &Store, user: UserAccount) -> Result<(), ServiceError> {
    let mut data = store.write()?;
    if data.users.values().any(|u| u.email == user.email) {
        return Err(ServiceError::DuplicateEmail(user.email));
    }
    data.users.insert(user.id, user);
    store.flush(&data)
}

pub fn get(store: &Store, id: &UserId) -> Result<Option<UserAccount>, ServiceError> {
    Ok(store.read()?.users.get(id).cloned())
}

/// Email lookup is case-sensitive, matching the stored value exactly.
pub fn find_by_email(store: &Store, email: &str) -> Result<Option<UserAccount>, ServiceError> {
    Ok(store
        .read()?
        .users
        .values()
        .find(|u| u.email == email)
        .cloned())
}

pub fn find_by_token(store: &Store, token: &str) -> Result<Option<UserAccount>, ServiceError> {
    Ok(store
        .read()?
        .users
        .values()
        .find(|u| u.verification_token.as_deref() == Some(token))
        .cloned())
}

/// Flips the account to verified and clears its token. The only mutation
/// accounts undergo after creation.
pub fn mark_verified(store: &Store, id: &UserId) -> Result<(), ServiceError> {
    let mut data = store.write()?;
    let user = data
        .users
        .get_mut(id)
        .ok_or_else(|| ServiceError::NotFound("User".to_string()))?;
    user.is_verified = true;
    user.verification_token = None;
    store.flush(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::now;
    use uuid::Uuid;

    fn account(email: &str) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: email.to_string(),
            company: None,
            password_hash: "$2b$10$hash".to_string(),
            verification_token: Some("tok".to_string()),
            is_verified: false,
            created_at: now(),
        }
    }

    #[test]
    fn duplicate_email_rejected_at_write_time() {
        let store = Store::in_memory();
        insert(&store, account("a@example.com")).unwrap();
        let err = insert(&store, account("a@example.com")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateEmail(_)));
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let store = Store::in_memory();
        insert(&store, account("a@example.com")).unwrap();
        assert!(find_by_email(&store, "A@example.com").unwrap().is_none());
        assert!(find_by_email(&store, "a@example.com").unwrap().is_some());
    }

    #[test]
    fn verification_clears_token() {
        let store = Store::in_memory();
        let user = account("a@example.com");
        let id = user.id;
        insert(&store, user).unwrap();

        mark_verified(&store, &id).unwrap();
        let user = get(&store, &id).unwrap().unwrap();
        assert!(user.is_verified);
        assert!(user.verification_token.is_none());
        assert!(find_by_token(&store, "tok").unwrap().is_none());
    }
}
