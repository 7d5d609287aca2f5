//! This is a library that provides objects and functionality to populate a
//! campground listing database with randomly generated sample data.

pub mod campground;
pub mod database;
pub mod error;
pub mod generate;
pub mod seeder;
pub mod seeds;

pub use database::Database;
pub use error::Error;
pub use error::Result;
