//! Replace the campgrounds in a database with freshly generated ones
use crate::{
    Database,
    campground::Campground,
    error::Result,
    generate::{Generator, SeedProfile},
};
use rand::Rng;
use tracing::{debug, info};

/// A summary of a completed seeding run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    /// The number of campgrounds that were removed before inserting
    pub deleted: u64,
    /// The ids of the inserted campgrounds, in insertion order
    pub inserted: Vec<String>,
}

/// Remove every existing campground from `db` and insert `profile.count`
/// newly generated ones. Inserts happen one at a time, and `on_insert` is
/// called with the index of each campground after it has been stored.
///
/// The first failed insert stops the run. Campgrounds that were inserted
/// before the failure are left in the database.
pub async fn seed<R, F>(
    db: &Database,
    profile: &SeedProfile,
    generator: &mut Generator<R>,
    mut on_insert: F,
) -> Result<SeedReport>
where
    R: Rng,
    F: FnMut(usize, &Campground),
{
    profile.validate()?;
    debug!(?profile, backend = %db.backend(), "seeding campgrounds");

    let deleted = Campground::delete_all(db).await?;
    let mut report = SeedReport {
        deleted,
        inserted: Vec::with_capacity(profile.count),
    };

    for i in 0..profile.count {
        let mut camp = generator.campground(profile);
        let id = camp.insert(db).await?;
        on_insert(i, &camp);
        report.inserted.push(id);
    }

    info!(
        deleted = report.deleted,
        inserted = report.inserted.len(),
        "seeding complete"
    );
    Ok(report)
}
