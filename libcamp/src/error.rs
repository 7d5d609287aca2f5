//! Objects related to reporting errors from this library

use mongodb::bson;

/// A list of error types that can occur within this library
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("can't insert the object, it already exists in the database with id = {}", .0)]
    InvalidInsertObjectAlreadyExists(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported database url '{0}'")]
    UnsupportedDatabaseUrl(String),

    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),

    #[error(transparent)]
    DatabaseMigrationError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    MongoError(#[from] mongodb::error::Error),

    #[error("Invalid object id: {0}")]
    InvalidObjectId(#[from] bson::oid::Error),

    #[error(transparent)]
    BsonSerialization(#[from] bson::ser::Error),

    #[error(transparent)]
    BsonDeserialization(#[from] bson::de::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// A convenience type alias for a [Result] with [Error] as its error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
