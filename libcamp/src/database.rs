//! Connections to the document database that holds the campground listings
use crate::error::{Error, Result};
use mongodb::{Client, bson::doc, options::ClientOptions};
use sqlx::{Pool, Sqlite, SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;
use strum_macros::Display;
use tracing::{debug, trace};

/// The database used by the web application in development
pub const DEFAULT_URL: &str = "mongodb://localhost:27017/yelpcamp-capstone";

/// The database name used when a MongoDB url doesn't specify one
pub const DEFAULT_DATABASE_NAME: &str = "yelpcamp-capstone";

/// The name of the collection that holds the campground documents
pub const COLLECTION: &str = "campgrounds";

/// The kind of database that a url refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Backend {
    #[strum(serialize = "mongodb")]
    Mongo,
    #[strum(serialize = "sqlite")]
    Sqlite,
}

impl Backend {
    /// Determine the backend from the scheme of a database url
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
            Ok(Backend::Mongo)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(Error::UnsupportedDatabaseUrl(url.to_string()))
        }
    }
}

/// An object that represents a connection to the campground database
#[derive(Clone, Debug)]
pub enum Database {
    /// A MongoDB server, the database used by the web application
    Mongo {
        client: Client,
        db: mongodb::Database,
    },
    /// A local SQLite file that keeps each document as JSON text
    Sqlite(Pool<Sqlite>),
}

impl From<Pool<Sqlite>> for Database {
    /// **WARNING**: This is primarily intended for tests. You should probably
    /// use [Database::open()] instead of creating the pool yourself, since
    /// [Database::open()] will perform database schema migration automatically.
    fn from(value: Pool<Sqlite>) -> Self {
        Self::Sqlite(value)
    }
}

impl Database {
    /// Open a connection to the database at the given url. MongoDB urls
    /// (`mongodb://` or `mongodb+srv://`) connect to a server and select the
    /// database named in the url path. SQLite urls (`sqlite:`) open or create
    /// a local file and perform any necessary migrations.
    pub async fn open(url: &str) -> Result<Self> {
        match Backend::from_url(url)? {
            Backend::Mongo => {
                let options = ClientOptions::parse(url).await?;
                let name = options
                    .default_database
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
                debug!(?options.hosts, %name, "connecting to mongodb");
                let client = Client::with_options(options)?;
                let db = client.database(&name);
                // the driver connects lazily
                db.run_command(doc! { "ping": 1 }).await?;
                Ok(Database::Mongo { client, db })
            }
            Backend::Sqlite => {
                let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
                let pool = SqlitePool::connect_with(options).await?;
                trace!("Running database migrations");
                sqlx::migrate!("../db/migrations").run(&pool).await?;
                Ok(Database::Sqlite(pool))
            }
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Database::Mongo { .. } => Backend::Mongo,
            Database::Sqlite(_) => Backend::Sqlite,
        }
    }

    /// The name of the database that this connection is using
    pub fn name(&self) -> String {
        match self {
            Database::Mongo { db, .. } => db.name().to_string(),
            Database::Sqlite(_) => "main".to_string(),
        }
    }

    /// Close the connection, waiting for any outstanding operations to finish
    pub async fn close(self) {
        debug!(backend = %self.backend(), "closing database connection");
        match self {
            Database::Mongo { client, .. } => client.shutdown().await,
            Database::Sqlite(pool) => pool.close().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(Backend::from_url(DEFAULT_URL).unwrap(), Backend::Mongo);
        assert_eq!(
            Backend::from_url("mongodb+srv://user:pw@cluster0.example.net/camps").unwrap(),
            Backend::Mongo
        );
        assert_eq!(
            Backend::from_url("sqlite://campgrounds.sqlite").unwrap(),
            Backend::Sqlite
        );
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(matches!(
            Backend::from_url("postgres://localhost/camps"),
            Err(Error::UnsupportedDatabaseUrl(_))
        ));
        assert!(matches!(
            Backend::from_url("campgrounds.sqlite"),
            Err(Error::UnsupportedDatabaseUrl(_))
        ));
    }

    #[test(tokio::test)]
    async fn test_open_sqlite_memory() {
        let db = Database::open("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        assert_eq!(db.backend(), Backend::Sqlite);
        assert_eq!(db.backend().to_string(), "sqlite");
        db.close().await;
    }

    #[test(tokio::test)]
    async fn test_open_unsupported() {
        let res = Database::open("redis://localhost").await;
        assert!(matches!(res, Err(Error::UnsupportedDatabaseUrl(_))));
    }
}
