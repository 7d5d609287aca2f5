//! Objects to manage the campground documents stored in the database
use crate::{
    Database,
    database::COLLECTION,
    error::{Error, Result},
};
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use tracing::{debug, trace};

/// An image attached to a campground listing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub filename: String,
}

/// The only kind of geometry that campgrounds use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GeometryKind {
    Point,
}

/// A GeoJSON geometry locating a campground on a map
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,

    /// Coordinates in GeoJSON order: `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: GeometryKind::Point,
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// A campground listing, in the shape that the web application stores it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Campground {
    /// The id of the document in the database. This is `None` until the
    /// campground has been inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    /// The nightly price in whole dollars
    pub price: u32,

    pub description: String,

    /// A human-readable "City, State" string
    pub location: String,

    /// The object id of the user who owns this listing, as a hex string
    pub author: String,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    docid: String,
    body: String,
}

impl Campground {
    /// Check that this campground can be stored in a way that the web
    /// application can read back
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidData("campground title is empty".to_string()));
        }
        if ObjectId::parse_str(&self.author).is_err() {
            return Err(Error::InvalidData(format!(
                "author '{}' is not a valid object id",
                self.author
            )));
        }
        if let Some(img) = self.images.iter().find(|img| img.url.is_empty()) {
            return Err(Error::InvalidData(format!(
                "image '{}' has no url",
                img.filename
            )));
        }
        Ok(())
    }

    /// Convert to a BSON document. Ids are stored as native object ids so
    /// that the web application can resolve the author reference.
    pub fn to_document(&self) -> Result<Document> {
        let mut document = bson::to_document(self)?;
        document.insert("author", ObjectId::parse_str(&self.author)?);
        if let Some(ref id) = self.id {
            document.insert("_id", ObjectId::parse_str(id)?);
        }
        Ok(document)
    }

    /// Convert from a BSON document loaded from the database
    pub fn from_document(mut document: Document) -> Result<Self> {
        for key in ["_id", "author"] {
            if let Ok(oid) = document.get_object_id(key) {
                document.insert(key, oid.to_hex());
            }
        }
        bson::from_document(document).map_err(Into::into)
    }

    /// Remove every campground from the database, returning the number of
    /// documents that were deleted
    pub async fn delete_all(db: &Database) -> Result<u64> {
        let deleted = match db {
            Database::Mongo { db, .. } => {
                db.collection::<Document>(COLLECTION)
                    .delete_many(doc! {})
                    .await?
                    .deleted_count
            }
            Database::Sqlite(pool) => {
                sqlx::query("DELETE FROM cs_documents WHERE collection=?")
                    .bind(COLLECTION)
                    .execute(pool)
                    .await?
                    .rows_affected()
            }
        };
        debug!(deleted, "removed existing campgrounds");
        Ok(deleted)
    }

    /// Add this campground to the database. If this call completes
    /// successfully, the id of this object will be updated to the id that the
    /// database assigned to the new document.
    pub async fn insert(&mut self, db: &Database) -> Result<String> {
        if let Some(ref id) = self.id {
            return Err(Error::InvalidInsertObjectAlreadyExists(id.clone()));
        }
        self.validate()?;

        let id = match db {
            Database::Mongo { db, .. } => {
                let res = db
                    .collection::<Document>(COLLECTION)
                    .insert_one(self.to_document()?)
                    .await?;
                inserted_id_to_string(res.inserted_id)?
            }
            Database::Sqlite(pool) => {
                let id = ObjectId::new().to_hex();
                sqlx::query("INSERT INTO cs_documents (docid, collection, body) VALUES (?, ?, ?)")
                    .bind(&id)
                    .bind(COLLECTION)
                    .bind(serde_json::to_string(self)?)
                    .execute(pool)
                    .await?;
                id
            }
        };
        trace!(%id, title = %self.title, "inserted campground");
        self.id = Some(id.clone());
        Ok(id)
    }

    /// Count the campgrounds in the database
    pub async fn count(db: &Database) -> Result<u64> {
        match db {
            Database::Mongo { db, .. } => db
                .collection::<Document>(COLLECTION)
                .count_documents(doc! {})
                .await
                .map_err(Into::into),
            Database::Sqlite(pool) => {
                let n: i64 = sqlx::query(
                    "SELECT COUNT(*) as ndocs FROM cs_documents WHERE collection=?",
                )
                .bind(COLLECTION)
                .fetch_one(pool)
                .await?
                .try_get("ndocs")?;
                Ok(n.try_into().unwrap_or_default())
            }
        }
    }

    /// Loads all campgrounds from the database, sorted by title
    pub async fn load_all(db: &Database) -> Result<Vec<Campground>> {
        match db {
            Database::Mongo { db, .. } => {
                let mut cursor = db
                    .collection::<Document>(COLLECTION)
                    .find(doc! {})
                    .sort(doc! { "title": 1 })
                    .await?;
                let mut campgrounds = Vec::new();
                while let Some(document) = cursor.try_next().await? {
                    campgrounds.push(Self::from_document(document)?);
                }
                Ok(campgrounds)
            }
            Database::Sqlite(pool) => {
                let rows: Vec<DocumentRow> = sqlx::query_as(
                    r#"SELECT docid, body FROM cs_documents WHERE collection=?
                    ORDER BY json_extract(body, '$.title') ASC, docid ASC"#,
                )
                .bind(COLLECTION)
                .fetch_all(pool)
                .await?;
                rows.into_iter()
                    .map(|row| -> Result<Campground> {
                        let mut campground: Campground = serde_json::from_str(&row.body)?;
                        campground.id = Some(row.docid);
                        Ok(campground)
                    })
                    .collect()
            }
        }
    }
}

/// The hex or string form of an id assigned by MongoDB
fn inserted_id_to_string(id: Bson) -> Result<String> {
    match id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s),
        other => Err(Error::InvalidData(format!(
            "unexpected document id type: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::{Pool, Sqlite};
    use test_log::test;

    fn campground(title: &str) -> Campground {
        Campground {
            id: None,
            title: title.to_string(),
            price: 15,
            description: "A quiet spot by the water".to_string(),
            location: "Boise, Idaho".to_string(),
            author: "692e03e22c5965e21aadf5b8".to_string(),
            images: vec![Image {
                url: "https://example.com/camp.jpg".to_string(),
                filename: "camp".to_string(),
            }],
            geometry: Some(Geometry::point(-116.2146068, 43.6187102)),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let mut camp = campground("Misty Hollow");
        let value = serde_json::to_value(&camp).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Misty Hollow",
                "price": 15,
                "description": "A quiet spot by the water",
                "location": "Boise, Idaho",
                "author": "692e03e22c5965e21aadf5b8",
                "images": [{"url": "https://example.com/camp.jpg", "filename": "camp"}],
                "geometry": {"type": "Point", "coordinates": [-116.2146068, 43.6187102]},
            })
        );

        camp.geometry = None;
        camp.id = Some("692e03e22c5965e21aadf5b9".to_string());
        let value = serde_json::to_value(&camp).unwrap();
        assert!(value.get("geometry").is_none());
        assert_eq!(value["_id"], "692e03e22c5965e21aadf5b9");
    }

    #[test]
    fn test_inserted_id_forms() {
        let oid = ObjectId::parse_str("692e03e22c5965e21aadf5b9").unwrap();
        assert_eq!(
            inserted_id_to_string(Bson::ObjectId(oid)).unwrap(),
            "692e03e22c5965e21aadf5b9"
        );
        assert_eq!(
            inserted_id_to_string(Bson::String("camp-1".to_string())).unwrap(),
            "camp-1"
        );
        assert!(matches!(
            inserted_id_to_string(Bson::Int32(7)),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_bson_object_ids() {
        let mut camp = campground("Elk Creek");
        camp.id = Some("692e03e22c5965e21aadf5b9".to_string());
        let document = camp.to_document().expect("failed to convert to bson");
        assert!(matches!(document.get("author"), Some(Bson::ObjectId(_))));
        assert!(matches!(document.get("_id"), Some(Bson::ObjectId(_))));

        let loaded = Campground::from_document(document).expect("failed to convert from bson");
        assert_eq!(loaded, camp);
    }

    #[test]
    fn test_validate() {
        assert!(campground("Sky Flats").validate().is_ok());

        let camp = campground("   ");
        assert!(matches!(camp.validate(), Err(Error::InvalidData(_))));

        let mut camp = campground("Sky Flats");
        camp.author = "not-an-id".to_string();
        assert!(matches!(camp.validate(), Err(Error::InvalidData(_))));

        let mut camp = campground("Sky Flats");
        camp.images[0].url.clear();
        assert!(matches!(camp.validate(), Err(Error::InvalidData(_))));
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_insert_and_load(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        assert_eq!(Campground::count(&db).await.unwrap(), 0);

        let mut titles = vec!["Roaring River", "Ancient Bay", "Silent Cliffs"];
        for title in titles.iter() {
            let mut camp = campground(title);
            let id = camp.insert(&db).await.expect("failed to insert");
            assert_eq!(id.len(), 24);
            assert_eq!(camp.id.as_deref(), Some(id.as_str()));
        }
        assert_eq!(Campground::count(&db).await.unwrap(), 3);

        let loaded = Campground::load_all(&db).await.expect("failed to load");
        titles.sort();
        assert_eq!(
            loaded.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            titles
        );
        for camp in loaded {
            assert!(camp.id.is_some());
            assert_eq!(camp.geometry, Some(Geometry::point(-116.2146068, 43.6187102)));
        }
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_insert_twice(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let mut camp = campground("Dusty Spring");
        camp.insert(&db).await.expect("failed to insert");
        let res = camp.insert(&db).await;
        assert!(matches!(
            res,
            Err(Error::InvalidInsertObjectAlreadyExists(_))
        ));
        assert_eq!(Campground::count(&db).await.unwrap(), 1);
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_insert_invalid(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let mut camp = campground("Dusty Spring");
        camp.author = "nobody".to_string();
        assert!(camp.insert(&db).await.is_err());
        assert!(camp.id.is_none());
        assert_eq!(Campground::count(&db).await.unwrap(), 0);
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_delete_all(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        assert_eq!(Campground::delete_all(&db).await.unwrap(), 0);
        for title in ["Maple Pond", "Sea Sands"] {
            campground(title).insert(&db).await.expect("failed to insert");
        }
        assert_eq!(Campground::delete_all(&db).await.unwrap(), 2);
        assert_eq!(Campground::count(&db).await.unwrap(), 0);
    }
}
