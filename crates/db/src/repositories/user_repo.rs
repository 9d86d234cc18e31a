//! Repository for the user table.

use chrono::Utc;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::{next_id, Store};

/// Provides create and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The uniqueness check and the insert happen under one write lock, so
    /// two concurrent registrations of the same name cannot both succeed.
    pub async fn create(store: &Store, input: &CreateUser) -> Result<User, CoreError> {
        let mut users = store.users.write().await;

        if users.iter().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            )));
        }

        let user = User {
            id: next_id(&users, |u| u.id),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<User> {
        store.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(store: &Store, username: &str) -> Option<User> {
        store
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// List all users in registration order.
    pub async fn list(store: &Store) -> Vec<User> {
        store.users.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn new_user(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_find() {
        let store = Store::new();
        let user = UserRepo::create(&store, &new_user("john")).await.unwrap();
        assert_eq!(user.id, 1);

        let by_id = UserRepo::find_by_id(&store, user.id).await.unwrap();
        assert_eq!(by_id.username, "john");
        let by_name = UserRepo::find_by_username(&store, "john").await.unwrap();
        assert_eq!(by_name.id, user.id);
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let store = Store::new();
        UserRepo::create(&store, &new_user("alice")).await.unwrap();
        let result = UserRepo::create(&store, &new_user("alice")).await;

        assert_matches!(result, Err(CoreError::Conflict(_)));
        assert_eq!(UserRepo::list(&store).await.len(), 1);
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let store = Store::new();
        UserRepo::create(&store, &new_user("alice")).await.unwrap();
        assert!(UserRepo::create(&store, &new_user("Alice")).await.is_ok());
        assert!(UserRepo::find_by_username(&store, "ALICE").await.is_none());
    }
}
