use mongodb::error::{ErrorKind, WriteFailure};

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Maps duplicate key write errors to [Error::InsertUniqueViolation]
    ///
    pub fn from_write(err: mongodb::error::Error) -> Self {
        let ErrorKind::Write(ref write_failure) = *err.kind else {
            return Error::Mongo(err);
        };

        let WriteFailure::WriteError(write_error) = write_failure else {
            return Error::Mongo(err);
        };

        match write_error.code == DUPLICATE_KEY_CODE {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }
}
