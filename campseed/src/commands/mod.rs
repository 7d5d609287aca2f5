//! Handlers for the campseed subcommands
pub(crate) mod campgrounds;
pub(crate) mod config;
