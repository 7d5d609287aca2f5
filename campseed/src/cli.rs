use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use libcamp::generate::{Generator, ImageSource, SeedProfile};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Database url, e.g. 'mongodb://localhost:27017/yelpcamp-capstone' or 'sqlite://camps.sqlite'"
    )]
    pub database: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Replace all campgrounds in the database with random sample data")]
    Seed {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(short, long, help = "Don't ask for confirmation before deleting campgrounds")]
        yes: bool,
    },
    #[command(about = "Generate sample campgrounds without touching the database")]
    Preview {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long, help = "Show all campground fields")]
        full: bool,
        #[command(flatten)]
        output: OutputOptions,
    },
    #[command(about = "Show the number of campgrounds in the database")]
    Count,
    #[command(about = "List all campgrounds in the database")]
    List {
        #[arg(long, help = "Show all campground fields")]
        full: bool,
        #[command(flatten)]
        output: OutputOptions,
    },
    #[command(about = "Delete all campgrounds from the database")]
    Clear {
        #[arg(short, long, help = "Don't ask for confirmation")]
        yes: bool,
    },
    #[command(about = "Manage the campseed configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    #[command(about = "Show the current configuration")]
    Show,
    #[command(
        about = "Change configuration values",
        group(
            clap::ArgGroup::new("values")
                .required(true)
                .multiple(true)
                .args(&["url", "author"]),
        ))]
    Set {
        #[arg(long, help = "The database to use when --database isn't given")]
        url: Option<String>,
        #[arg(long, help = "The object id of the user that owns seeded campgrounds")]
        author: Option<String>,
    },
    #[command(about = "Remove the configuration file")]
    Reset,
}

#[derive(Args, Debug)]
pub struct OutputOptions {
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(short, long, default_value_t = 50, help = "Number of campgrounds to generate")]
    pub count: usize,
    #[arg(short, long, help = "Object id of the user that owns the campgrounds")]
    pub author: Option<String>,
    #[arg(long, default_value_t = ImageSource::Hosted, help = "Where campground images come from (hosted, placeholder)")]
    pub images: ImageSource,
    #[arg(long, help = "Attach a map location to each campground")]
    pub geometry: bool,
    #[arg(long, default_value_t = 10, help = "Lowest generated price")]
    pub price_min: u32,
    #[arg(long, default_value_t = 20, help = "Number of distinct generated prices")]
    pub price_span: u32,
    #[arg(long, help = "Seed for the random number generator, for reproducible output")]
    pub rng_seed: Option<u64>,
}

impl ProfileArgs {
    /// Build a seed profile from the arguments. `default_author` is used when
    /// no author was given on the command line.
    pub fn profile(&self, default_author: Option<&str>) -> SeedProfile {
        let defaults = SeedProfile::default();
        SeedProfile {
            count: self.count,
            author: self
                .author
                .as_deref()
                .or(default_author)
                .map(str::to_string)
                .unwrap_or(defaults.author),
            images: self.images,
            geometry: self.geometry,
            price_min: self.price_min,
            price_span: self.price_span,
        }
    }

    pub fn generator(&self) -> Generator {
        match self.rng_seed {
            Some(seed) => Generator::from_seed(seed),
            None => Generator::new(),
        }
    }
}
