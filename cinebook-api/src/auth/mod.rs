mod password;
mod role;

pub use jwt_auth::User;
pub use password::*;
pub use role::*;

use crate::{error::Error, repository::UsersRepository};
use bson::oid::ObjectId;

///
/// Records that belong to the user that created them
///
pub trait Owned {
    fn owner_id(&self) -> ObjectId;
}

///
/// Validates that user is the owner of the resource.
///
/// ### Errors
/// - [Error::Forbidden] when user is not the owner
///
pub fn require_owner(user: &User, resource: &impl Owned) -> Result<(), Error> {
    match resource.owner_id() == user.id {
        true => Ok(()),
        false => Err(Error::Forbidden("resource belongs to another user")),
    }
}

///
/// Validates that user currently has one of the roles.
/// Role is read from storage, so changes apply to already issued tokens.
///
/// ### Returns
/// current role of the user
///
/// ### Errors
/// - [Error::Forbidden] when
///     - user does not exist anymore
///     - user has none of the roles
///
pub async fn require_any_role(
    users_repository: &dyn UsersRepository,
    user: &User,
    roles: &[Role],
) -> Result<Role, Error> {
    let role = users_repository
        .find(user.id)
        .await?
        .map(|user| user.role)
        .ok_or(Error::Forbidden("user does not exist"))?;

    match roles.contains(&role) {
        true => Ok(role),
        false => Err(Error::Forbidden("missing role")),
    }
}
