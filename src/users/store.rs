//! Ordered in-memory user collection.
//!
//! # Responsibilities
//! - Hold user records in insertion order
//! - Provide lookup by id (linear scan, first match wins)
//! - Compute the next id from the current contents
//!
//! The store has no locking of its own; `UserService` owns it behind a mutex.

use crate::users::model::{User, UserId};

/// Process-lifetime collection of user records.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two startup records.
    pub fn seeded() -> Self {
        Self::from_users(vec![
            User::new(1, "John Doe", "john@example.com"),
            User::new(2, "Jane Smith", "jane@example.com"),
        ])
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Index of the first record with the given id.
    pub fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Highest id currently present plus one, or 1 when empty.
    ///
    /// Recomputed on every call: deleting the current maximum makes its
    /// number available again.
    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
    }

    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove the record at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> User {
        self.users.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_contents() {
        let store = UserStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], User::new(1, "John Doe", "john@example.com"));
        assert_eq!(store.all()[1], User::new(2, "Jane Smith", "jane@example.com"));
    }

    #[test]
    fn test_next_id() {
        let mut store = UserStore::new();
        assert_eq!(store.next_id(), 1);

        store.push(User::new(5, "a", "a@x"));
        store.push(User::new(3, "b", "b@x"));
        assert_eq!(store.next_id(), 6);

        // Removing the max hands its number out again
        let idx = store.position(5).unwrap();
        store.remove(idx);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = UserStore::from_users(vec![
            User::new(1, "a", "a@x"),
            User::new(2, "b", "b@x"),
            User::new(3, "c", "c@x"),
        ]);
        let removed = store.remove(1);
        assert_eq!(removed.id, 2);
        let ids: Vec<_> = store.all().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let store = UserStore::from_users(vec![
            User::new(7, "first", "f@x"),
            User::new(7, "second", "s@x"),
        ]);
        assert_eq!(store.get(7).unwrap().name, "first");
        assert_eq!(store.position(7), Some(0));
        assert!(store.get(8).is_none());
    }
}
