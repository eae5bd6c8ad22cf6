use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{
    DuplicateField, NewUser, PageRequest, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::outgoing::{UserRepository, UserRepositoryError};

/// Vec-backed store with the same uniqueness rules as the `users` table.
/// Clones share state, so a test can keep a handle after giving one to a service.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap()
    }

    pub fn insert(&self, user: NewUser) -> User {
        let stored = User {
            id: UserId::generate(),
            username: user.username,
            email: user.email,
            name: user.name,
            phone: user.phone,
            image_data: user.image_data,
            following_ids: vec![],
            post_ids: vec![],
        };
        self.lock().push(stored.clone());
        stored
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.lock().iter().find(|u| u.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn conflict(
        users: &[User],
        skip: Option<UserId>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Option<DuplicateField> {
        let others = || users.iter().filter(move |u| Some(u.id) != skip);
        if let Some(username) = username {
            if others().any(|u| u.username == username) {
                return Some(DuplicateField::Username);
            }
        }
        if let Some(email) = email {
            if others().any(|u| u.email == email) {
                return Some(DuplicateField::Email);
            }
        }
        None
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        if let Some(field) =
            Self::conflict(&self.lock(), None, Some(&user.username), Some(&user.email))
        {
            return Err(UserRepositoryError::Conflict { field });
        }
        Ok(self.insert(user))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.get(id))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, UserRepositoryError> {
        let mut users = self.lock();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserRepositoryError::NotFound)?;

        if changes.is_noop_for(&users[index]) {
            return Err(UserRepositoryError::NoChanges);
        }
        if let Some(field) = Self::conflict(
            &users,
            Some(id),
            changes.username.as_deref(),
            changes.email.as_deref(),
        ) {
            return Err(UserRepositoryError::Conflict { field });
        }

        let user = &mut users[index];
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if changes.name.is_some() {
            user.name = changes.name;
        }
        if changes.phone.is_some() {
            user.phone = changes.phone;
        }
        if changes.image_data.is_some() {
            user.image_data = changes.image_data;
        }
        if let Some(ids) = changes.following_ids {
            user.following_ids = ids;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.lock();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self
            .lock()
            .iter()
            .skip(page.skip() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}
