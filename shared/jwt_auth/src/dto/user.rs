use bson::oid::ObjectId;
use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Debug, Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from the session token.
///
/// Role is not part of the token, it has to be read from storage.
///
#[derive(Debug)]
pub struct InnerUser {
    pub id: ObjectId,
    pub email: String,
}

impl User {
    pub fn new(id: ObjectId, email: String) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, email }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
