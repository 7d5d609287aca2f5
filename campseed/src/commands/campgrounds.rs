//! Commands that generate, inspect, or remove campgrounds
use crate::{
    cli::{OutputOptions, ProfileArgs},
    output::{
        self,
        rows::{CampgroundRow, CampgroundRowFull},
    },
    prompt::confirm,
};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use libcamp::{Database, campground::Campground, seeder};
use tracing::debug;

/// Handle the `campseed seed` command
pub(crate) async fn seed(
    db: &Database,
    args: ProfileArgs,
    default_author: Option<&str>,
    yes: bool,
) -> Result<()> {
    let profile = args.profile(default_author);
    profile.validate()?;

    let existing = Campground::count(db).await?;
    if existing > 0
        && !confirm(
            &format!(
                "Seeding will delete {existing} existing campgrounds from database '{}'. Continue?",
                db.name()
            ),
            yes,
        )?
    {
        return Err(inquire::InquireError::OperationCanceled.into());
    }

    let mut generator = args.generator();
    let progress = ProgressBar::new(profile.count as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")?,
    );
    let res = seeder::seed(db, &profile, &mut generator, |_, camp| {
        progress.set_message(camp.title.clone());
        progress.inc(1);
    })
    .await;
    progress.finish_and_clear();
    let report = res?;
    debug!(?report.inserted);
    println!(
        "Removed {} campgrounds and inserted {} new ones",
        report.deleted,
        report.inserted.len()
    );
    Ok(())
}

/// Handle the `campseed preview` command
pub(crate) fn preview(
    args: ProfileArgs,
    default_author: Option<&str>,
    full: bool,
    output: OutputOptions,
) -> Result<()> {
    let profile = args.profile(default_author);
    profile.validate()?;
    let camps = args.generator().campgrounds(&profile);
    print_campgrounds(&camps, full, output)
}

/// Handle the `campseed count` command
pub(crate) async fn count(db: &Database) -> Result<()> {
    let n = Campground::count(db).await?;
    println!("{n} campgrounds in database '{}'", db.name());
    Ok(())
}

/// Handle the `campseed list` command
pub(crate) async fn list(db: &Database, full: bool, output: OutputOptions) -> Result<()> {
    let camps = Campground::load_all(db).await?;
    print_campgrounds(&camps, full, output)
}

/// Handle the `campseed clear` command
pub(crate) async fn clear(db: &Database, yes: bool) -> Result<()> {
    if !confirm(
        &format!("Delete all campgrounds from database '{}'?", db.name()),
        yes,
    )? {
        return Err(inquire::InquireError::OperationCanceled.into());
    }
    let deleted = Campground::delete_all(db).await?;
    println!("Removed {deleted} campgrounds");
    Ok(())
}

fn print_campgrounds(camps: &[Campground], full: bool, output: OutputOptions) -> Result<()> {
    let str = match full {
        true => output::format_seq(camps.iter().map(CampgroundRowFull::new), output.format)?,
        false => output::format_seq(camps.iter().map(CampgroundRow::new), output.format)?,
    };
    println!("{str}");
    Ok(())
}
