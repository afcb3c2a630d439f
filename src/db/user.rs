use super::{Repository, StoreError};
use crate::models::User;

pub type UserStore = dyn Repository<User>;

pub async fn fetch_by_email(store: &UserStore, email: &str) -> Result<Option<User>, StoreError> {
    store.get(email).await
}

/// Returns `false` when the email is already registered.
pub async fn insert(store: &UserStore, user: User) -> Result<bool, StoreError> {
    let email = user.email.clone();
    store.insert(&email, user).await
}
