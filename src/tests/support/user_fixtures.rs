use async_trait::async_trait;
use mockall::mock;

use crate::modules::users::application::domain::entities::{
    NewUser, PageRequest, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        name: Some("Test User".to_string()),
        phone: None,
        image_data: None,
    }
}

pub fn sample_user(username: &str, email: &str) -> User {
    User {
        id: UserId::generate(),
        username: username.to_string(),
        email: email.to_string(),
        name: Some("Test User".to_string()),
        phone: None,
        image_data: None,
        following_ids: vec![],
        post_ids: vec![],
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;
        async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, UserRepositoryError>;
        async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;
        async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserRepositoryError>;
    }
}
