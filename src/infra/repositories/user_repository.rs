//! User repository implementation.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `update` and `delete` do not check how many rows they touched; acting on
/// a missing ID succeeds.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID; `None` when no row matches
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address; `None` when no row matches
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user and return the generated ID
    async fn create(&self, user: &User) -> AppResult<i32>;

    /// Overwrite name, email and password hash of the row with `user.id`
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Permanently delete the row with the given ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: &User) -> AppResult<i32> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(model.id)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(user.name.clone()))
            .col_expr(user::Column::Email, Expr::value(user.email.clone()))
            .col_expr(
                user::Column::PasswordHash,
                Expr::value(user.password_hash.clone()),
            )
            .filter(user::Column::Id.eq(user.id))
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        UserEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
