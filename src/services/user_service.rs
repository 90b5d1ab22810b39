//! User service - account use cases and credential checks.
//!
//! Email uniqueness is checked here before insert (check-then-act); the
//! unique key on `users.email` catches the rare concurrent duplicate.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::TokenIssuer;
use crate::domain::{CreateUser, LoginRequest, Password, UpdateUser, User, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Verified against when the email is unknown, so both login failure paths
/// pay for one Argon2 verification.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("timing-equalisation-only").ok());

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user; fails with `Conflict` if the email is taken
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse>;

    /// Get user by ID; absent stays absent
    async fn get_user(&self, id: i32) -> AppResult<Option<UserResponse>>;

    /// Merge the present fields of `changes` into the stored user
    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<()>;

    /// Delete user by ID without an existence check
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// List all users ordered by ID
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;

    /// Check credentials and return a signed token
    async fn login(&self, credentials: LoginRequest) -> AppResult<String>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenIssuer>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            tracing::info!("Rejected registration for an existing email");
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let mut user = User::new(input.name, input.email, password_hash);
        user.id = self.users.create(&user).await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<UserResponse>> {
        Ok(self.users.find_by_id(id).await?.map(UserResponse::from))
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<()> {
        let mut user = self.users.find_by_id(id).await?.ok_or_not_found("User")?;

        if let Some(name) = changes.name() {
            user.name = name.to_string();
        }
        if let Some(email) = changes.email() {
            user.email = email.to_string();
        }
        if let Some(password) = changes.password() {
            user.password_hash = Password::new(password)?.into_string();
        }

        self.users.update(&user).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn login(&self, credentials: LoginRequest) -> AppResult<String> {
        let user = self.users.find_by_email(&credentials.email).await?;

        let authenticated = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone())
                .verify(&credentials.password)
                .then_some(user),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    dummy.verify(&credentials.password);
                }
                None
            }
        };

        match authenticated {
            Some(user) => self.tokens.issue(&user.email, user.id),
            None => {
                tracing::warn!("Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::MockTokenIssuer;

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            name: "Leandro".to_string(),
            email: "leandro@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    fn service(repo: MockUserRepository, tokens: MockTokenIssuer) -> UserManager {
        UserManager::new(Arc::new(repo), Arc::new(tokens))
    }

    fn new_user_input() -> CreateUser {
        CreateUser {
            name: "Leandro".to_string(),
            email: "leandro@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password_and_hides_it() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u: &User| {
                u.password_hash != "password123"
                    && Password::from_hash(u.password_hash.clone()).verify("password123")
            })
            .times(1)
            .returning(|_| Ok(1));

        let response = service(repo, MockTokenIssuer::new())
            .create_user(new_user_input())
            .await
            .unwrap();

        assert_eq!(
            response,
            UserResponse {
                id: 1,
                name: "Leandro".to_string(),
                email: "leandro@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_skips_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "leandro@example.com")
            .returning(|_| Ok(Some(stored_user("password123"))));
        repo.expect_create().never();

        let result = service(repo, MockTokenIssuer::new())
            .create_user(new_user_input())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_lookup_error_aborts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::internal("connection refused")));
        repo.expect_create().never();

        let result = service(repo, MockTokenIssuer::new())
            .create_user(new_user_input())
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_user_absent() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(999)).returning(|_| Ok(None));

        let result = service(repo, MockTokenIssuer::new()).get_user(999).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_name_only_keeps_email_and_password() {
        let existing = stored_user("password123");
        let original_hash = existing.password_hash.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update()
            .withf(move |u: &User| {
                u.id == 1
                    && u.name == "X"
                    && u.email == "leandro@example.com"
                    && u.password_hash == original_hash
            })
            .times(1)
            .returning(|_| Ok(()));

        let changes = UpdateUser {
            name: Some("X".to_string()),
            email: Some(String::new()),
            password: None,
        };
        let result = service(repo, MockTokenIssuer::new())
            .update_user(1, changes)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_password_is_rehashed() {
        let existing = stored_user("password123");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update()
            .withf(|u: &User| {
                let stored = Password::from_hash(u.password_hash.clone());
                stored.verify("newpassword123") && !stored.verify("password123")
            })
            .times(1)
            .returning(|_| Ok(()));

        let changes = UpdateUser {
            password: Some("newpassword123".to_string()),
            ..Default::default()
        };
        let result = service(repo, MockTokenIssuer::new())
            .update_user(1, changes)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let result = service(repo, MockTokenIssuer::new())
            .update_user(42, UpdateUser::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user_delegates_unconditionally() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_delete().with(eq(7)).times(1).returning(|_| Ok(()));

        let result = service(repo, MockTokenIssuer::new()).delete_user(7).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_users_maps_to_responses() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                stored_user("password123"),
                User {
                    id: 2,
                    name: "Ana".to_string(),
                    email: "ana@example.com".to_string(),
                    password_hash: "hash".to_string(),
                },
            ])
        });

        let users = service(repo, MockTokenIssuer::new())
            .list_users()
            .await
            .unwrap();

        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(users[1].email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("password123"))));

        let mut tokens = MockTokenIssuer::new();
        tokens
            .expect_issue()
            .withf(|email, id| email == "leandro@example.com" && *id == 1)
            .times(1)
            .returning(|_, _| Ok("signed-token".to_string()));

        let token = service(repo, tokens)
            .login(LoginRequest {
                email: "leandro@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token, "signed-token");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "leandro@example.com")
            .returning(|_| Ok(Some(stored_user("password123"))));
        repo.expect_find_by_email()
            .withf(|email| email == "nobody@example.com")
            .returning(|_| Ok(None));

        let mut tokens = MockTokenIssuer::new();
        tokens.expect_issue().never();

        let service = service(repo, tokens);
        let wrong_password = service
            .login(LoginRequest {
                email: "leandro@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_lookup_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::internal("connection refused")));

        let result = service(repo, MockTokenIssuer::new())
            .login(LoginRequest {
                email: "leandro@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
