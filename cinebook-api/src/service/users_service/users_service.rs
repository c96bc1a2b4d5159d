use super::Session;
use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Creates customer account, or super admin account
    /// when email is listed in config
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - name is blank
    ///     - email is not an email
    ///     - password is shorter than 6 characters
    /// - [Error::DuplicateEmail] when email is already registered
    ///
    async fn register(&self, user: input::RegisterUser) -> Result<output::User, Error>;

    ///
    /// ### Errors
    /// - [Error::EmailNotRegistered] when no user has the email
    /// - [Error::InvalidCredentials] when password does not match
    ///
    async fn login(&self, credentials: input::LoginUser) -> Result<Session, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user was deleted after the token was issued
    ///
    async fn find_profile(&self, user: &User) -> Result<output::User, Error>;

    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not a super admin
    ///
    async fn find_all(&self, user: &User) -> Result<Vec<output::User>, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn find(&self, id: ObjectId) -> Result<output::User, Error>;

    ///
    /// Users can change their own name and email.
    /// Super admins can change any user, including role.
    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not allowed to make the change
    /// - [Error::Validation] when new name or email is invalid
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::DuplicateEmail] when new email is already registered
    ///
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        update: input::UserUpdate,
    ) -> Result<output::User, Error>;
}
