use super::{Session, UsersService, UsersServiceConfig};
use crate::{
    auth::{self, Role, User},
    dto::{input, output},
    error::Error,
    repository::{self, UsersRepository},
    service::validate_not_blank,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::JwtIssuer;
use std::sync::Arc;
use time::OffsetDateTime;

const MIN_PASSWORD_LEN: usize = 6;

pub struct UsersServiceImpl {
    config: UsersServiceConfig,
    issuer: JwtIssuer,
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(
        config: UsersServiceConfig,
        issuer: JwtIssuer,
        repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            config,
            issuer,
            repository,
        }
    }

    fn normalize_email(email: &str) -> Result<String, Error> {
        let email = email.trim().to_lowercase();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

        match valid {
            true => Ok(email),
            false => Err(Error::Validation("email is invalid".to_string())),
        }
    }

    fn validate_password(password: &str) -> Result<(), Error> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "password must have at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(())
    }

    fn map_unique_violation(err: repository::Error) -> Error {
        match err {
            repository::Error::InsertUniqueViolation => Error::DuplicateEmail,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn register(&self, user: input::RegisterUser) -> Result<output::User, Error> {
        tracing::info!("registering user");

        validate_not_blank(&user.name, "name")?;
        let email = Self::normalize_email(&user.email)?;
        Self::validate_password(&user.password)?;

        let role = match self.config.super_admin_emails.contains(&email) {
            true => Role::SuperAdmin,
            false => Role::Customer,
        };

        let password = user.password;
        let password_hash =
            tokio::task::spawn_blocking(move || auth::hash_password(&password))
                .await
                .map_err(anyhow::Error::from)??;

        let inserted = self
            .repository
            .insert(
                user.name.trim(),
                &email,
                &password_hash,
                role,
                OffsetDateTime::now_utc(),
            )
            .await
            .map_err(Self::map_unique_violation)?;

        tracing::info!(id = %inserted.id, role = role.as_ref(), "registered user");

        Ok(output::User::from(inserted))
    }

    async fn login(&self, credentials: input::LoginUser) -> Result<Session, Error> {
        tracing::info!("logging in user");

        let email = credentials.email.trim().to_lowercase();
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(Error::EmailNotRegistered)?;

        let password = credentials.password;
        let password_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || {
            auth::verify_password(&password, &password_hash)
        })
        .await
        .map_err(anyhow::Error::from)?;
        if !valid {
            return Err(Error::InvalidCredentials);
        }

        let token = self
            .issuer
            .issue(user.id, &user.email)
            .map_err(anyhow::Error::from)?;

        tracing::info!(id = %user.id, "logged in user");

        Ok(Session {
            user: output::User::from(user),
            token,
            max_age: self.issuer.lifespan(),
        })
    }

    async fn find_profile(&self, user: &User) -> Result<output::User, Error> {
        self.find(user.id).await
    }

    async fn find_all(&self, user: &User) -> Result<Vec<output::User>, Error> {
        tracing::info!("finding all users");

        auth::require_any_role(self.repository.as_ref(), user, &[Role::SuperAdmin]).await?;

        let users = self.repository.find_all().await?;
        tracing::info!(count = users.len(), "found users");

        let users = users.into_iter().map(output::User::from).collect();

        Ok(users)
    }

    async fn find(&self, id: ObjectId) -> Result<output::User, Error> {
        tracing::info!(%id, "finding user");

        let user = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::UserNotExist)?;

        tracing::info!("found user");

        Ok(output::User::from(user))
    }

    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        update: input::UserUpdate,
    ) -> Result<output::User, Error> {
        tracing::info!(%id, "updating user");
        tracing::trace!(?update);

        let acting_role = auth::require_any_role(
            self.repository.as_ref(),
            user,
            &[Role::Customer, Role::Admin, Role::SuperAdmin],
        )
        .await?;
        if acting_role != Role::SuperAdmin {
            if id != user.id {
                return Err(Error::Forbidden("user can update only own account"));
            }
            if update.role.is_some() {
                return Err(Error::Forbidden("only super admin can change role"));
            }
        }

        if let Some(name) = &update.name {
            validate_not_blank(name, "name")?;
        }
        let email = update
            .email
            .as_deref()
            .map(Self::normalize_email)
            .transpose()?;

        let update = repository::UserUpdate {
            name: update.name.map(|name| name.trim().to_string()),
            email,
            role: update.role,
        };

        self.repository
            .update(id, update)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Self::map_unique_violation(err),
            })?;

        tracing::info!(%id, "updated user");

        self.find(id).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::{Algorithm, EncodingKey};
    use repository::MockUsersRepository;
    use std::time::Duration;

    fn issuer() -> JwtIssuer {
        JwtIssuer::new(
            EncodingKey::from_secret(b"secret"),
            Algorithm::HS256,
            Duration::from_secs(3600),
        )
    }

    fn stored_user(id: ObjectId, role: Role, password_hash: &str) -> repository::User {
        repository::User {
            id,
            name: "name".to_string(),
            email: "a@example.com".to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn service(repository: MockUsersRepository) -> UsersServiceImpl {
        UsersServiceImpl::new(
            UsersServiceConfig {
                super_admin_emails: vec!["root@example.com".to_string()],
            },
            issuer(),
            Arc::new(repository),
        )
    }

    fn register_input(email: &str, password: &str) -> input::RegisterUser {
        input::RegisterUser {
            name: "name".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_customer() {
        let mut repository = MockUsersRepository::new();
        repository
            .expect_insert()
            .withf(|_, email, password_hash, role, _| {
                email == "a@example.com"
                    && password_hash.starts_with("$argon2")
                    && *role == Role::Customer
            })
            .returning(|name, email, password_hash, role, created_at| {
                Ok(repository::User {
                    id: ObjectId::new(),
                    name: name.to_string(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    role,
                    created_at,
                })
            });

        let result = service(repository)
            .register(register_input(" A@Example.com ", "password1"))
            .await;

        let user = result.unwrap();
        assert_eq!(user.email, "a@example.com");
        assert_eq!(user.role, Role::Customer);
    }

    #[tokio::test]
    async fn register_super_admin_email() {
        let mut repository = MockUsersRepository::new();
        repository
            .expect_insert()
            .withf(|_, _, _, role, _| *role == Role::SuperAdmin)
            .returning(|name, email, password_hash, role, created_at| {
                Ok(repository::User {
                    id: ObjectId::new(),
                    name: name.to_string(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    role,
                    created_at,
                })
            });

        let result = service(repository)
            .register(register_input("root@example.com", "password1"))
            .await;

        assert_eq!(result.unwrap().role, Role::SuperAdmin);
    }

    #[tokio::test]
    async fn register_duplicate_email() {
        let mut repository = MockUsersRepository::new();
        repository
            .expect_insert()
            .returning(|_, _, _, _, _| Err(repository::Error::InsertUniqueViolation));

        let result = service(repository)
            .register(register_input("a@example.com", "password1"))
            .await;

        assert!(matches!(result, Err(Error::DuplicateEmail)));
    }

    #[tokio::test]
    async fn register_validation() {
        let cases = [
            register_input("a@example.com", "short"),
            register_input("not-an-email", "password1"),
            input::RegisterUser {
                name: " ".to_string(),
                email: "a@example.com".to_string(),
                password: "password1".to_string(),
            },
        ];

        for case in cases {
            let result = service(MockUsersRepository::new()).register(case).await;

            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[tokio::test]
    async fn login_unknown_email() {
        let mut repository = MockUsersRepository::new();
        repository.expect_find_by_email().returning(|_| Ok(None));

        let result = service(repository)
            .login(input::LoginUser {
                email: "a@example.com".to_string(),
                password: "password1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(Error::EmailNotRegistered)));
    }

    #[tokio::test]
    async fn login_wrong_password() {
        let password_hash = auth::hash_password("password1").unwrap();
        let mut repository = MockUsersRepository::new();
        repository.expect_find_by_email().returning(move |_| {
            Ok(Some(stored_user(ObjectId::new(), Role::Customer, &password_hash)))
        });

        let result = service(repository)
            .login(input::LoginUser {
                email: "a@example.com".to_string(),
                password: "password2".to_string(),
            })
            .await;

        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_ok() {
        let id = ObjectId::new();
        let password_hash = auth::hash_password("password1").unwrap();
        let mut repository = MockUsersRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@example.com")
            .returning(move |_| Ok(Some(stored_user(id, Role::Customer, &password_hash))));

        let session = service(repository)
            .login(input::LoginUser {
                email: "A@example.com".to_string(),
                password: "password1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, id.to_hex());
        assert!(!session.token.is_empty());
        assert_eq!(session.max_age, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn find_all_by_customer() {
        let id = ObjectId::new();
        let mut repository = MockUsersRepository::new();
        repository
            .expect_find()
            .returning(move |_| Ok(Some(stored_user(id, Role::Customer, "hash"))));
        repository.expect_find_all().never();

        let result = service(repository)
            .find_all(&User::new(id, "a@example.com".to_string()))
            .await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn update_other_user_by_customer() {
        let id = ObjectId::new();
        let mut repository = MockUsersRepository::new();
        repository
            .expect_find()
            .returning(move |_| Ok(Some(stored_user(id, Role::Customer, "hash"))));
        repository.expect_update().never();

        let result = service(repository)
            .update(
                &User::new(id, "a@example.com".to_string()),
                ObjectId::new(),
                input::UserUpdate {
                    name: Some("new name".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn update_own_role_by_customer() {
        let id = ObjectId::new();
        let mut repository = MockUsersRepository::new();
        repository
            .expect_find()
            .returning(move |_| Ok(Some(stored_user(id, Role::Customer, "hash"))));
        repository.expect_update().never();

        let result = service(repository)
            .update(
                &User::new(id, "a@example.com".to_string()),
                id,
                input::UserUpdate {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn update_role_by_super_admin() {
        let super_admin_id = ObjectId::new();
        let target_id = ObjectId::new();
        let mut repository = MockUsersRepository::new();
        repository.expect_find().returning(move |id| match id == super_admin_id {
            true => Ok(Some(stored_user(id, Role::SuperAdmin, "hash"))),
            false => Ok(Some(stored_user(id, Role::Admin, "hash"))),
        });
        repository
            .expect_update()
            .withf(move |id, update| *id == target_id && update.role == Some(Role::Admin))
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(repository)
            .update(
                &User::new(super_admin_id, "root@example.com".to_string()),
                target_id,
                input::UserUpdate {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result.unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn update_to_registered_email() {
        let id = ObjectId::new();
        let mut repository = MockUsersRepository::new();
        repository
            .expect_find()
            .returning(move |_| Ok(Some(stored_user(id, Role::Customer, "hash"))));
        repository
            .expect_update()
            .returning(|_, _| Err(repository::Error::InsertUniqueViolation));

        let result = service(repository)
            .update(
                &User::new(id, "a@example.com".to_string()),
                id,
                input::UserUpdate {
                    email: Some("b@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::DuplicateEmail)));
    }
}
