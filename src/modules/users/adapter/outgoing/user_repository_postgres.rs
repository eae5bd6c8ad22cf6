use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set, SqlErr,
};
use std::sync::Arc;
use tracing::debug;

use crate::modules::users::application::domain::entities::{
    DuplicateField, NewUser, PageRequest, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // Unique-index violations become Conflict; the index name tells which field.
    fn map_write_error(err: DbErr) -> UserRepositoryError {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return UserRepositoryError::Conflict {
                field: DuplicateField::from_store_message(&msg),
            };
        }

        let msg = err.to_string();
        let lowered = msg.to_lowercase();
        if lowered.contains("23505")
            || lowered.contains("duplicate key")
            || lowered.contains("unique constraint")
        {
            return UserRepositoryError::Conflict {
                field: DuplicateField::from_store_message(&msg),
            };
        }

        UserRepositoryError::DatabaseError(msg)
    }

    fn map_read_error(err: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let user_id = UserId::generate();
        let active_user = UserActiveModel {
            id: Set(user_id.value()),
            username: Set(user.username),
            email: Set(user.email),
            name: Set(user.name),
            phone: Set(user.phone),
            image_data: Set(user.image_data),
            following_ids: Set(Vec::new()),
            post_ids: Set(Vec::new()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        // Re-read so the caller sees whatever the store normalised on insert.
        self.find_by_id(user_id)
            .await?
            .ok_or_else(|| UserRepositoryError::DatabaseError("User creation failed".to_string()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let user = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_read_error)?;

        Ok(user.map(|model| model.into_domain()))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, UserRepositoryError> {
        let existing = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_read_error)?
            .ok_or(UserRepositoryError::NotFound)?;

        if changes.is_empty() || changes.is_noop_for(&existing.clone().into_domain()) {
            debug!(user_id = %id, "Update would not modify any field");
            return Err(UserRepositoryError::NoChanges);
        }

        let mut active_user: UserActiveModel = existing.into();
        if let Some(username) = changes.username {
            active_user.username = Set(username);
        }
        if let Some(email) = changes.email {
            active_user.email = Set(email);
        }
        if let Some(name) = changes.name {
            active_user.name = Set(Some(name));
        }
        if let Some(phone) = changes.phone {
            active_user.phone = Set(Some(phone));
        }
        if let Some(image_data) = changes.image_data {
            active_user.image_data = Set(Some(image_data));
        }
        if let Some(following_ids) = changes.following_ids {
            active_user.following_ids = Set(following_ids);
        }

        active_user.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => UserRepositoryError::NoChanges,
            other => Self::map_write_error(other),
        })?;

        self.find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(Self::map_read_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserRepositoryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .order_by_asc(UserColumn::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::map_read_error)?;

        Ok(users.into_iter().map(|model| model.into_domain()).collect())
    }
}
