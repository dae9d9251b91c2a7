use std::error::Error as StdError;
use std::fmt;

pub type CustomResult<T> = Result<T, Error>;

/// errors produced by the model layer itself. database constraint failures
/// (unique, not-null, foreign key) stay `diesel::result::Error` and are
/// passed upward unchanged for the caller to translate.
#[derive(Debug)]
pub enum Error {
    Database(diesel::result::Error),
    PasswordHash(bcrypt::BcryptError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Database(e) => write!(f, "database error: {}", e),
            Error::PasswordHash(e) => write!(f, "password hashing error: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Database(e) => Some(e),
            Error::PasswordHash(e) => Some(e),
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Error {
        Error::Database(e)
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(e: bcrypt::BcryptError) -> Error {
        Error::PasswordHash(e)
    }
}
